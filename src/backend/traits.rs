//! Trait abstraction for the backend client to enable mocking in tests

use super::error::BackendError;
use super::types::{
    ApiReply, CheckMobileReply, CreateProfileReply, CreateProfileRequest, LoginReply,
    LoginRequest,
};
use async_trait::async_trait;

/// Trait for backend operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackendApi: Send + Sync {
    /// Submit admin credentials. The reply is decoded whatever the HTTP status.
    async fn login(&self, request: &LoginRequest) -> Result<ApiReply<LoginReply>, BackendError>;

    /// Ask whether a mobile number already has a profile
    async fn check_mobile(&self, mobile: &str) -> Result<CheckMobileReply, BackendError>;

    /// Create a profile. The reply is decoded whatever the HTTP status.
    async fn create_profile(
        &self,
        request: &CreateProfileRequest,
    ) -> Result<ApiReply<CreateProfileReply>, BackendError>;
}
