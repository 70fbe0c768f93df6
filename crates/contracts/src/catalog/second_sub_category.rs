use serde::{Deserialize, Serialize};

use crate::EntityId;

/// Optional third level of the classification tree, attached to a
/// sub-category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecondSubCategory {
    pub id: EntityId,
    pub name: String,
    pub sub_category_id: EntityId,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecondSubCategoryDto {
    pub name: String,
    pub sub_category_id: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Filter body for the by-subcategory listing (POST read, fixed contract).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategoryFilter {
    pub sub_category_id: EntityId,
}

impl SecondSubCategoryDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name cannot be empty".to_string());
        }
        if self.sub_category_id <= 0 {
            return Err("A parent sub-category must be selected".to_string());
        }
        Ok(())
    }
}
