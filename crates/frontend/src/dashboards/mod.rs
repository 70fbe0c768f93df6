pub mod overview;

pub use overview::OverviewDashboard;
