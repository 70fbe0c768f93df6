//! Entity gateways, one module per backend resource. Each `api` module pins
//! the resource's route template and exposes its operations; quirky
//! endpoints live next to the gateway they belong to.

pub mod brands;
pub mod categories;
pub mod discount_slabs;
pub mod group_discounts;
pub mod groups;
pub mod products;
pub mod retailers;
pub mod second_sub_categories;
pub mod settings;
pub mod staff;
pub mod sub_categories;
pub mod variants;
