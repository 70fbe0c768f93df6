use serde::{Deserialize, Serialize};

use crate::EntityId;

/// Second level of the classification tree, always attached to a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    pub id: EntityId,
    pub name: String,
    pub category_id: EntityId,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategoryDto {
    pub name: String,
    pub category_id: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Filter body for the by-category listing, which the backend exposes as a
/// POST even though it is a read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFilter {
    pub category_id: EntityId,
}

impl SubCategoryDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name cannot be empty".to_string());
        }
        if self.category_id <= 0 {
            return Err("A parent category must be selected".to_string());
        }
        Ok(())
    }
}
