//! Wire contracts shared between the TradeWare admin client and its REST
//! backend. Pure data: serde types plus the validation helpers the forms
//! run before submitting.

pub mod catalog;
pub mod dashboards;
pub mod enums;
pub mod people;
pub mod pricing;
pub mod shared;
pub mod system;

/// Numeric identifier used by every backend entity.
pub type EntityId = i64;
