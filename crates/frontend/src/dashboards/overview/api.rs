use contracts::dashboards::{DashboardSummary, SalesPoint};

use crate::shared::http::{ApiClient, ApiError};

const API_BASE: &str = "/api/dashboard";

pub fn summary_path() -> String {
    format!("{}/summary", API_BASE)
}

pub fn sales_chart_path(months: u32) -> String {
    format!("{}/sales-chart?months={}", API_BASE, months)
}

pub async fn summary(api: &ApiClient) -> Result<DashboardSummary, ApiError> {
    api.get_json(&summary_path()).await
}

/// Monthly sales totals for the last `months` months, oldest first.
pub async fn sales_chart(api: &ApiClient, months: u32) -> Result<Vec<SalesPoint>, ApiError> {
    api.get_json(&sales_chart_path(months)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_paths() {
        assert_eq!(summary_path(), "/api/dashboard/summary");
        assert_eq!(sales_chart_path(6), "/api/dashboard/sales-chart?months=6");
    }
}
