//! Form controllers
//!
//! Each controller owns its fields and state machine. Network calls are split
//! into `begin_*` (validate, produce a request) and `finish_*` (apply the
//! result) so the request can run off the UI loop while only the owning
//! controller waits for it.

mod login;
mod onboarding;
mod recharge;

pub use login::LoginController;
pub use onboarding::{OnboardingAction, ProfileOnboardingController};
pub use recharge::RechargeFormValidator;

#[cfg(test)]
pub use login::LoginState;
#[cfg(test)]
pub use onboarding::OnboardingStep;

use crate::backend::{
    ApiReply, BackendApi, BackendError, CheckMobileReply, CreateProfileReply,
    CreateProfileRequest, LoginReply, LoginRequest,
};

/// How a user-triggered request ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    Success,
    /// The backend answered but refused
    Failure(String),
    /// No usable reply arrived
    NetworkError,
}

/// Controller a request belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOwner {
    Login,
    Onboarding,
}

/// A request produced by a `begin_*` call, not yet answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingRequest {
    Login(LoginRequest),
    CheckMobile(String),
    CreateProfile(CreateProfileRequest),
}

impl PendingRequest {
    /// Status-bar text while the request is in flight
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Login(_) => "Authenticating...",
            Self::CheckMobile(_) => "Checking mobile number...",
            Self::CreateProfile(_) => "Creating profile...",
        }
    }

    pub fn owner(&self) -> RequestOwner {
        match self {
            Self::Login(_) => RequestOwner::Login,
            Self::CheckMobile(_) | Self::CreateProfile(_) => RequestOwner::Onboarding,
        }
    }

    /// Send the request and wait for its reply
    pub async fn send(self, backend: &dyn BackendApi) -> CompletedRequest {
        match self {
            Self::Login(request) => CompletedRequest::Login(backend.login(&request).await),
            Self::CheckMobile(mobile) => {
                let result = backend.check_mobile(&mobile).await;
                CompletedRequest::CheckMobile { mobile, result }
            }
            Self::CreateProfile(request) => {
                CompletedRequest::CreateProfile(backend.create_profile(&request).await)
            }
        }
    }
}

/// A reply ready to hand to the owning controller's `finish_*`
#[derive(Debug)]
pub enum CompletedRequest {
    Login(Result<ApiReply<LoginReply>, BackendError>),
    CheckMobile {
        mobile: String,
        result: Result<CheckMobileReply, BackendError>,
    },
    CreateProfile(Result<ApiReply<CreateProfileReply>, BackendError>),
}

impl CompletedRequest {
    pub fn owner(&self) -> RequestOwner {
        match self {
            Self::Login(_) => RequestOwner::Login,
            Self::CheckMobile { .. } | Self::CreateProfile(_) => RequestOwner::Onboarding,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockBackendApi;

    #[tokio::test]
    async fn test_send_keeps_checked_mobile() {
        let mut mock = MockBackendApi::new();
        mock.expect_check_mobile()
            .withf(|mobile| mobile == "0871234567")
            .times(1)
            .returning(|_| Ok(CheckMobileReply { exists: false }));

        let request = PendingRequest::CheckMobile("0871234567".to_string());
        assert_eq!(request.owner(), RequestOwner::Onboarding);

        match request.send(&mock).await {
            CompletedRequest::CheckMobile { mobile, result } => {
                assert_eq!(mobile, "0871234567");
                assert_eq!(result, Ok(CheckMobileReply { exists: false }));
            }
            other => panic!("unexpected completion: {other:?}"),
        }
    }

    #[test]
    fn test_owners_match() {
        let completed = CompletedRequest::Login(Err(BackendError::Transport("reset".into())));
        assert_eq!(completed.owner(), RequestOwner::Login);
        let pending = PendingRequest::CreateProfile(CreateProfileRequest {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "j@d.com".to_string(),
            mobile: "0871234567".to_string(),
        });
        assert_eq!(pending.owner(), RequestOwner::Onboarding);
        assert_eq!(pending.describe(), "Creating profile...");
    }
}
