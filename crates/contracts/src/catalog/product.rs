use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::EntityId;

/// Product master record. Pricing lives on the variants; the product itself
/// carries the classification and presentation fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category_id: EntityId,
    pub sub_category_id: EntityId,
    #[serde(default)]
    pub second_sub_category_id: Option<EntityId>,
    pub brand_id: EntityId,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Scalar part of the product form. Images travel in the multipart body next
/// to these fields, not inside them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category_id: EntityId,
    pub sub_category_id: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_sub_category_id: Option<EntityId>,
    pub brand_id: EntityId,
}

impl ProductDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name cannot be empty".to_string());
        }
        if self.category_id <= 0 || self.sub_category_id <= 0 {
            return Err("Category and sub-category must be selected".to_string());
        }
        if self.brand_id <= 0 {
            return Err("A brand must be selected".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_incomplete_classification() {
        let dto = ProductDto {
            name: "Basmati Rice 5kg".to_string(),
            category_id: 3,
            sub_category_id: 0,
            brand_id: 12,
            ..ProductDto::default()
        };
        assert!(dto.validate().is_err());

        let dto = ProductDto { sub_category_id: 9, ..dto };
        assert!(dto.validate().is_ok());
    }
}
