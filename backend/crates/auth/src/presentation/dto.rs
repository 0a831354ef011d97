//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::user::UserIdentity;

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: UserDto,
}

/// Authenticated account as exposed to the panel frontend
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl From<&UserIdentity> for UserDto {
    fn from(identity: &UserIdentity) -> Self {
        Self {
            id: *identity.user_id.as_uuid(),
            email: identity.email.to_string(),
            name: identity.display_name.clone(),
            role: identity.role.code().to_string(),
        }
    }
}

// ============================================================================
// Session Status
// ============================================================================

/// Session status response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    pub user: Option<UserDto>,
    pub expires_at_ms: Option<i64>,
}

impl SessionStatusResponse {
    pub fn unauthenticated() -> Self {
        Self {
            authenticated: false,
            user: None,
            expires_at_ms: None,
        }
    }
}

// ============================================================================
// Change Password
// ============================================================================

/// Change password request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_defaults() {
        // Missing fields deserialize to empty strings so the use case can
        // answer with its own missing-credentials error instead of a 422.
        let request: LoginRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.email, "");
        assert_eq!(request.password, "");
        assert!(!request.remember_me);
    }

    #[test]
    fn test_login_request_camel_case() {
        let request: LoginRequest = serde_json::from_str(
            r#"{"email":"admin@portfolio.com","password":"pw","rememberMe":true}"#,
        )
        .unwrap();
        assert_eq!(request.email, "admin@portfolio.com");
        assert!(request.remember_me);
    }

    #[test]
    fn test_session_status_serialization() {
        let status = SessionStatusResponse::unauthenticated();
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["authenticated"], false);
        assert!(json["user"].is_null());
        assert!(json["expiresAtMs"].is_null());
    }
}
