use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::ApprovalStatus;
use crate::EntityId;

/// Retailer account. Registration happens in the shop app; the admin panel
/// reviews, groups and approves these records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Retailer {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub shop_name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub group_id: Option<EntityId>,
    pub status: ApprovalStatus,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Scalar fields of the retailer edit form. The profile image is uploaded
/// as multipart form data alongside these.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetailerDto {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub shop_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<EntityId>,
}

impl RetailerDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name cannot be empty".to_string());
        }
        if !self.email.contains('@') {
            return Err("Email address is not valid".to_string());
        }
        if self.mobile.trim().len() < 10 {
            return Err("Mobile number must have at least 10 digits".to_string());
        }
        Ok(())
    }
}
