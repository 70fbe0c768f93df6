use serde::{Deserialize, Serialize};

/// Store-wide tax settings. A single record, read and written whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxSettings {
    pub tax_percent: f64,
    #[serde(default)]
    pub cess_percent: f64,
}

impl TaxSettings {
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=100.0).contains(&self.tax_percent) {
            return Err("Tax must be between 0 and 100 percent".to_string());
        }
        if !(0.0..=100.0).contains(&self.cess_percent) {
            return Err("Cess must be between 0 and 100 percent".to_string());
        }
        Ok(())
    }
}
