use serde::{Deserialize, Serialize};

use crate::enums::StaffRole;
use crate::EntityId;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Signed-in account as the backend returns it from `login`. The bearer
/// token is embedded in the record; the client persists the whole thing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub mobile: String,
    pub role: StaffRole,
    #[serde(default)]
    pub is_active: bool,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: UserRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_record_uses_camel_case_on_the_wire() {
        let user = UserRecord {
            id: 4,
            name: "Asha".to_string(),
            email: "asha@tradeware.example".to_string(),
            mobile: "9000000000".to_string(),
            role: StaffRole::Admin,
            is_active: true,
            token: "tok-123".to_string(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["isActive"], serde_json::json!(true));
        assert_eq!(value["role"], serde_json::json!("admin"));
        assert_eq!(value["token"], serde_json::json!("tok-123"));
    }

    #[test]
    fn login_response_round_trips() {
        let body = r#"{"user":{"id":1,"name":"Asha","email":"a@b.c","role":"manager","isActive":true,"token":"t"}}"#;
        let parsed: LoginResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.user.role, StaffRole::Manager);
        assert!(parsed.user.mobile.is_empty());
    }
}
