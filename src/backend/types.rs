//! Request and reply shapes for the backend endpoints

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value of the `status` field on a successful reply
pub const SUCCESS_STATUS: &str = "success";

/// A decoded reply together with the HTTP status it arrived with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply<T> {
    pub http_status: u16,
    pub body: T,
}

impl<T> ApiReply<T> {
    pub fn new(http_status: u16, body: T) -> Self {
        Self { http_status, body }
    }

    /// True for any 2xx status
    pub fn is_http_success(&self) -> bool {
        (200..300).contains(&self.http_status)
    }
}

/// Body of `POST /login`
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Reply of `POST /login`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginReply {
    pub status: Option<String>,
    pub error: Option<String>,
}

impl LoginReply {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(SUCCESS_STATUS)
    }
}

/// Reply of `GET /check-mobile`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CheckMobileReply {
    pub exists: bool,
}

/// Body of `POST /create-profile`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
}

/// Reply of `POST /create-profile`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateProfileReply {
    pub status: Option<String>,
    pub error: Option<String>,
}

impl CreateProfileReply {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(SUCCESS_STATUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_login_request_debug_hides_password() {
        let request = LoginRequest {
            username: "admin".to_string(),
            password: "hunter2".to_string(),
        };
        let debug = format!("{request:?}");
        assert!(debug.contains("admin"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_create_profile_request_uses_camel_case() {
        let request = CreateProfileRequest {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "j@d.com".to_string(),
            mobile: "+353871234567".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "firstName": "John",
                "lastName": "Doe",
                "email": "j@d.com",
                "mobile": "+353871234567"
            })
        );
    }

    #[test]
    fn test_login_reply_missing_fields_default_to_none() {
        let reply: LoginReply = serde_json::from_str("{}").unwrap();
        assert_eq!(reply, LoginReply::default());
        assert!(!reply.is_success());
    }

    #[test]
    fn test_login_reply_error_body() {
        let reply: LoginReply =
            serde_json::from_str(r#"{"error": "authentication failure"}"#).unwrap();
        assert_eq!(reply.error.as_deref(), Some("authentication failure"));
        assert!(!reply.is_success());
    }

    #[test]
    fn test_check_mobile_reply_requires_exists() {
        assert!(serde_json::from_str::<CheckMobileReply>(r#"{"error": "x"}"#).is_err());
        let reply: CheckMobileReply = serde_json::from_str(r#"{"exists": true}"#).unwrap();
        assert!(reply.exists);
    }

    #[test]
    fn test_create_profile_reply_success() {
        let reply: CreateProfileReply =
            serde_json::from_str(r#"{"status": "success"}"#).unwrap();
        assert!(reply.is_success());
    }

    #[test]
    fn test_api_reply_http_success_range() {
        assert!(ApiReply::new(200, ()).is_http_success());
        assert!(ApiReply::new(204, ()).is_http_success());
        assert!(!ApiReply::new(401, ()).is_http_success());
        assert!(!ApiReply::new(503, ()).is_http_success());
    }
}
