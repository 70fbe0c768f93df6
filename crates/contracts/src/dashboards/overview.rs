use serde::{Deserialize, Serialize};

/// Counters shown on the landing dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_products: u64,
    pub total_categories: u64,
    pub total_brands: u64,
    pub total_retailers: u64,
    pub pending_retailers: u64,
    pub total_staff: u64,
}

/// One month of the sales chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesPoint {
    pub month: String,
    pub total: f64,
}
