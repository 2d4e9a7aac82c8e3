//! Two-step profile onboarding modal
//!
//! Step one checks whether the mobile number is already registered. Known
//! numbers close the modal straight away; unknown ones move on to a profile
//! form whose submission closes it.

use super::RequestOutcome;
use crate::backend::{
    ApiReply, BackendError, CheckMobileReply, CreateProfileReply, CreateProfileRequest,
};
use crate::state::forms::validation::{is_valid_email, is_valid_name, is_valid_profile_mobile};
use crate::state::{Form, FormField, ValidationError};

pub const MOBILE_TITLE: &str = "Enter Mobile Number";
pub const PROFILE_TITLE: &str = "Create Profile";
/// Shown when the registration check could not be completed
pub const CHECK_FAILED_MESSAGE: &str = "Unable to verify mobile number";
/// Shown for any unsuccessful profile creation, including lost connections
pub const CREATE_FAILED_MESSAGE: &str = "Profile creation failed";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OnboardingStep {
    #[default]
    CollectingMobile,
    /// Carries the mobile number that passed step one
    CollectingProfile {
        mobile: String,
    },
    Done,
}

/// The control shown in the modal's button row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingAction {
    Continue,
    Create,
}

impl OnboardingAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Continue => "Continue",
            Self::Create => "Create Profile",
        }
    }
}

/// Render projection of the modal
#[derive(Debug, Clone)]
pub struct OnboardingView<'a> {
    pub visible: bool,
    pub title: &'static str,
    pub show_mobile_step: bool,
    pub show_profile_step: bool,
    /// Input fields of the visible section, in focus order
    pub fields: Vec<&'a FormField>,
    pub action: Option<OnboardingAction>,
    pub error: Option<&'a str>,
    pub active_field: usize,
}

#[derive(Debug, Clone)]
pub struct ProfileOnboardingController {
    step: OnboardingStep,
    mobile: FormField,
    first_name: FormField,
    last_name: FormField,
    email: FormField,
    active_field_index: usize,
    error: Option<String>,
}

impl ProfileOnboardingController {
    pub fn new() -> Self {
        Self {
            step: OnboardingStep::CollectingMobile,
            mobile: FormField::text("profileMobile", "Mobile Number"),
            first_name: FormField::text("firstName", "First Name"),
            last_name: FormField::text("lastName", "Last Name"),
            email: FormField::text("email", "Email"),
            active_field_index: 0,
            error: None,
        }
    }

    #[allow(dead_code)]
    pub fn step(&self) -> &OnboardingStep {
        &self.step
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The modal stays up until onboarding is done
    pub fn is_visible(&self) -> bool {
        !matches!(self.step, OnboardingStep::Done)
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.get_active_field_mut() {
            field.push_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.pop_char();
        }
    }

    #[allow(dead_code)]
    pub fn set_mobile(&mut self, value: &str) {
        self.mobile.set_text(value);
    }

    #[allow(dead_code)]
    pub fn set_profile(&mut self, first_name: &str, last_name: &str, email: &str) {
        self.first_name.set_text(first_name);
        self.last_name.set_text(last_name);
        self.email.set_text(email);
    }

    /// The action offered in the current step
    pub fn action(&self) -> Option<OnboardingAction> {
        match self.step {
            OnboardingStep::CollectingMobile => Some(OnboardingAction::Continue),
            OnboardingStep::CollectingProfile { .. } => Some(OnboardingAction::Create),
            OnboardingStep::Done => None,
        }
    }

    /// Step one: validate the mobile number.
    ///
    /// Returns the number to check, or `None` if it is invalid or the modal
    /// is not collecting a mobile number.
    pub fn begin_continue(&mut self) -> Option<String> {
        if !matches!(self.step, OnboardingStep::CollectingMobile) {
            return None;
        }

        let mobile = self.mobile.trimmed().to_string();
        self.error = None;

        if !is_valid_profile_mobile(&mobile) {
            self.error = Some(ValidationError::ProfileMobile.to_string());
            return None;
        }

        Some(mobile)
    }

    /// Apply the registration check for `mobile`
    pub fn finish_continue(
        &mut self,
        mobile: String,
        result: Result<CheckMobileReply, BackendError>,
    ) -> RequestOutcome {
        match result {
            Ok(CheckMobileReply { exists: true }) => {
                tracing::info!(%mobile, "mobile already registered, closing onboarding");
                self.transition(OnboardingStep::Done);
                RequestOutcome::Success
            }
            Ok(CheckMobileReply { exists: false }) => {
                tracing::info!(%mobile, "mobile not registered, collecting profile");
                self.transition(OnboardingStep::CollectingProfile { mobile });
                RequestOutcome::Success
            }
            Err(e) => {
                tracing::warn!(error = %e, "mobile check failed");
                self.error = Some(CHECK_FAILED_MESSAGE.to_string());
                if e.is_transport() {
                    RequestOutcome::NetworkError
                } else {
                    RequestOutcome::Failure(e.to_string())
                }
            }
        }
    }

    /// Step two: validate the profile fields.
    ///
    /// Returns the request to send, or `None` if a field is invalid or the
    /// modal is not collecting a profile.
    pub fn begin_create(&mut self) -> Option<CreateProfileRequest> {
        let OnboardingStep::CollectingProfile { mobile } = &self.step else {
            return None;
        };

        let first_name = self.first_name.trimmed();
        let last_name = self.last_name.trimmed();
        let email = self.email.trimmed();

        let checked = if first_name.is_empty() || last_name.is_empty() || email.is_empty() {
            Err(ValidationError::MissingProfileFields)
        } else if !is_valid_name(first_name) {
            Err(ValidationError::FirstName)
        } else if !is_valid_name(last_name) {
            Err(ValidationError::LastName)
        } else if !is_valid_email(email) {
            Err(ValidationError::Email)
        } else {
            Ok(CreateProfileRequest {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email: email.to_string(),
                mobile: mobile.clone(),
            })
        };

        match checked {
            Ok(request) => {
                self.error = None;
                Some(request)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Apply the result of the request started by `begin_create`.
    ///
    /// Transport failures and refusals share one message.
    pub fn finish_create(
        &mut self,
        result: Result<ApiReply<CreateProfileReply>, BackendError>,
    ) -> RequestOutcome {
        match result {
            Ok(reply) if reply.body.is_success() => {
                tracing::info!("profile created, closing onboarding");
                self.transition(OnboardingStep::Done);
                RequestOutcome::Success
            }
            Ok(reply) => {
                tracing::warn!(
                    status = reply.http_status,
                    error = ?reply.body.error,
                    "profile creation refused"
                );
                self.error = Some(CREATE_FAILED_MESSAGE.to_string());
                RequestOutcome::Failure(CREATE_FAILED_MESSAGE.to_string())
            }
            Err(e) => {
                tracing::warn!(error = %e, "profile creation request failed");
                self.error = Some(CREATE_FAILED_MESSAGE.to_string());
                RequestOutcome::Failure(CREATE_FAILED_MESSAGE.to_string())
            }
        }
    }

    fn transition(&mut self, step: OnboardingStep) {
        self.step = step;
        self.active_field_index = 0;
        self.error = None;
    }

    pub fn view(&self) -> OnboardingView<'_> {
        let (title, show_mobile_step, show_profile_step) = match self.step {
            OnboardingStep::CollectingMobile => (MOBILE_TITLE, true, false),
            OnboardingStep::CollectingProfile { .. } => (PROFILE_TITLE, false, true),
            OnboardingStep::Done => (PROFILE_TITLE, false, false),
        };
        let fields = (0..self.field_count())
            .filter_map(|index| self.get_field(index))
            .collect();

        OnboardingView {
            visible: self.is_visible(),
            title,
            show_mobile_step,
            show_profile_step,
            fields,
            action: self.action(),
            error: self.error(),
            active_field: self.active_field_index,
        }
    }
}

impl Default for ProfileOnboardingController {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ProfileOnboardingController {
    fn field_count(&self) -> usize {
        match self.step {
            OnboardingStep::CollectingMobile => 2, // mobile, buttons
            OnboardingStep::CollectingProfile { .. } => 4, // names, email, buttons
            OnboardingStep::Done => 1,
        }
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match (&self.step, index) {
            (OnboardingStep::CollectingMobile, 0) => Some(&self.mobile),
            (OnboardingStep::CollectingProfile { .. }, 0) => Some(&self.first_name),
            (OnboardingStep::CollectingProfile { .. }, 1) => Some(&self.last_name),
            (OnboardingStep::CollectingProfile { .. }, 2) => Some(&self.email),
            _ => None,
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match (&self.step, index) {
            (OnboardingStep::CollectingMobile, 0) => Some(&mut self.mobile),
            (OnboardingStep::CollectingProfile { .. }, 0) => Some(&mut self.first_name),
            (OnboardingStep::CollectingProfile { .. }, 1) => Some(&mut self.last_name),
            (OnboardingStep::CollectingProfile { .. }, 2) => Some(&mut self.email),
            _ => None,
        }
    }
}
