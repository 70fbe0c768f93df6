//! Accounts managed from the admin panel: retailers and staff.

pub mod retailer;
pub mod staff;

pub use retailer::{Retailer, RetailerDto};
pub use staff::{Staff, StaffDto};
