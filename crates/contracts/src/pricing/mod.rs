//! Pricing entities: retailer groups, their per-variant discounts, quantity
//! discount slabs and the tax settings.

pub mod discount_slab;
pub mod group;
pub mod group_discount;
pub mod tax;

pub use discount_slab::{DiscountSlab, DiscountSlabDto};
pub use group::{Group, GroupDto};
pub use group_discount::{GroupDiscount, GroupDiscountDto};
pub use tax::TaxSettings;
