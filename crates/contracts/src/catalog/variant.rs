use serde::{Deserialize, Serialize};

use crate::EntityId;

/// Sellable unit of a product (pack size, weight, flavour). Carries the
/// price pair: `price` is what the retailer pays, `mrp` the printed maximum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: EntityId,
    pub product_id: EntityId,
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    pub price: f64,
    pub mrp: f64,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantDto {
    pub product_id: EntityId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    pub price: f64,
    pub mrp: f64,
}

impl VariantDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name cannot be empty".to_string());
        }
        if self.price <= 0.0 {
            return Err("Price must be greater than zero".to_string());
        }
        if self.mrp < self.price {
            return Err("MRP cannot be lower than the selling price".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(price: f64, mrp: f64) -> VariantDto {
        VariantDto {
            product_id: 1,
            name: "500g".to_string(),
            sku: None,
            price,
            mrp,
        }
    }

    #[test]
    fn price_must_stay_under_mrp() {
        assert!(dto(80.0, 99.0).validate().is_ok());
        assert!(dto(80.0, 80.0).validate().is_ok());
        assert!(dto(99.0, 80.0).validate().is_err());
        assert!(dto(0.0, 80.0).validate().is_err());
    }
}
