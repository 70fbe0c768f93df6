use contracts::pricing::TaxSettings;

use crate::shared::http::{ApiClient, ApiError};

const BASE: &str = "/api/settings";

pub fn tax_path() -> String {
    format!("{}/tax", BASE)
}

pub async fn tax(api: &ApiClient) -> Result<TaxSettings, ApiError> {
    api.get_json(&tax_path()).await
}

pub async fn update_tax(api: &ApiClient, settings: &TaxSettings) -> Result<TaxSettings, ApiError> {
    api.put_json(&tax_path(), settings).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tax_settings_live_under_the_settings_base() {
        assert_eq!(tax_path(), "/api/settings/tax");
    }
}
