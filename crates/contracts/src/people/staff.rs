use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{ApprovalStatus, StaffRole};
use crate::EntityId;

/// Back-office account with panel access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub role: StaffRole,
    pub status: ApprovalStatus,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Scalar fields of the staff form; the profile image travels as multipart
/// form data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffDto {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub role: StaffRole,
}

impl StaffDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name cannot be empty".to_string());
        }
        if !self.email.contains('@') {
            return Err("Email address is not valid".to_string());
        }
        Ok(())
    }
}
