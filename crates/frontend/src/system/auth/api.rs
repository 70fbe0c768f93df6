use contracts::system::auth::{ChangePasswordRequest, LoginRequest, LoginResponse};

use crate::shared::http::{ApiClient, ApiError};

pub const BASE: &str = "/api/auth";

pub fn login_path() -> String {
    format!("{}/login", BASE)
}

pub fn change_password_path() -> String {
    format!("{}/change-password", BASE)
}

/// Authenticate with email and password. The backend answers 404 for an
/// unknown email and 403 for a wrong password; both surface as
/// [`ApiError::Status`] so the form can blame the right field.
pub async fn login(api: &ApiClient, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    api.post_json(&login_path(), request).await
}

/// Change the signed-in account's password; rides the normal bearer flow.
pub async fn change_password(
    api: &ApiClient,
    request: &ChangePasswordRequest,
) -> Result<(), ApiError> {
    api.post_json_unit(&change_password_path(), request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_routes_are_fixed() {
        assert_eq!(login_path(), "/api/auth/login");
        assert_eq!(change_password_path(), "/api/auth/change-password");
    }
}
