use serde::{Deserialize, Serialize};

use crate::EntityId;

/// Percentage discount a retailer group receives on one variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDiscount {
    pub id: EntityId,
    pub group_id: EntityId,
    pub variant_id: EntityId,
    pub discount_percent: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDiscountDto {
    pub group_id: EntityId,
    pub variant_id: EntityId,
    pub discount_percent: f64,
}

impl GroupDiscountDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.group_id <= 0 || self.variant_id <= 0 {
            return Err("Group and variant must be selected".to_string());
        }
        if !(0.0..=100.0).contains(&self.discount_percent) {
            return Err("Discount must be between 0 and 100 percent".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discount_is_clamped_to_percent_range() {
        let dto = GroupDiscountDto {
            group_id: 1,
            variant_id: 2,
            discount_percent: 12.5,
        };
        assert!(dto.validate().is_ok());
        assert!(GroupDiscountDto { discount_percent: -1.0, ..dto.clone() }
            .validate()
            .is_err());
        assert!(GroupDiscountDto { discount_percent: 101.0, ..dto }
            .validate()
            .is_err());
    }
}
