//! Read models for the dashboard screens.

pub mod overview;

pub use overview::{DashboardSummary, SalesPoint};
