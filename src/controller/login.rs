//! Admin login submission

use super::RequestOutcome;
use crate::backend::{ApiReply, BackendError, LoginReply, LoginRequest};
use crate::state::{Form, FormField, ValidationError};

/// Button label while idle
pub const LOGIN_LABEL: &str = "Login";
/// Button label while a request is in flight
pub const SUBMITTING_LABEL: &str = "Authenticating...";
/// Shown when the backend refuses without giving a reason
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again.";
/// Shown when no usable reply arrived
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Lifecycle of one login submission
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoginState {
    #[default]
    Idle,
    Submitting,
    Succeeded {
        redirect: String,
    },
    Failed,
}

/// Render projection of the login form
#[derive(Debug, Clone, Copy)]
pub struct LoginView<'a> {
    pub username: &'a FormField,
    pub password: &'a FormField,
    pub error: Option<&'a str>,
    pub button_label: &'static str,
    pub button_enabled: bool,
    pub active_field: usize,
}

#[derive(Debug, Clone)]
pub struct LoginController {
    username: FormField,
    password: FormField,
    active_field_index: usize,
    state: LoginState,
    error: Option<String>,
    dashboard_path: String,
}

impl LoginController {
    /// `dashboard_path` is where a successful login navigates to
    pub fn new(dashboard_path: impl Into<String>) -> Self {
        Self {
            username: FormField::text("username", "Username"),
            password: FormField::secret("password", "Password"),
            active_field_index: 0,
            state: LoginState::Idle,
            error: None,
            dashboard_path: dashboard_path.into(),
        }
    }

    #[allow(dead_code)]
    pub fn state(&self) -> &LoginState {
        &self.state
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, LoginState::Submitting)
    }

    /// Redirect target once the login has succeeded
    pub fn redirect(&self) -> Option<&str> {
        match &self.state {
            LoginState::Succeeded { redirect } => Some(redirect),
            _ => None,
        }
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
    pub fn set_username(&mut self, value: &str) {
        self.username.set_text(value);
    }

    #[allow(dead_code)]
    pub fn set_password(&mut self, value: &str) {
        self.password.set_text(value);
    }

    /// Start a submission.
    ///
    /// Returns the request to send, or `None` if a request is already in
    /// flight or the credentials are incomplete.
    pub fn begin_submit(&mut self) -> Option<LoginRequest> {
        if self.is_submitting() {
            tracing::debug!("login already in flight, ignoring submit");
            return None;
        }

        let username = self.username.trimmed().to_string();
        let password = self.password.trimmed().to_string();
        self.error = None;

        if username.is_empty() || password.is_empty() {
            self.error = Some(ValidationError::MissingCredentials.to_string());
            return None;
        }

        self.state = LoginState::Submitting;
        Some(LoginRequest { username, password })
    }

    /// Apply the result of the request started by `begin_submit`
    pub fn finish_submit(
        &mut self,
        result: Result<ApiReply<LoginReply>, BackendError>,
    ) -> RequestOutcome {
        match result {
            Ok(reply) if reply.is_http_success() && reply.body.is_success() => {
                tracing::info!(redirect = %self.dashboard_path, "login succeeded");
                self.state = LoginState::Succeeded {
                    redirect: self.dashboard_path.clone(),
                };
                RequestOutcome::Success
            }
            Ok(reply) => {
                let message = reply
                    .body
                    .error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_string());
                tracing::warn!(status = reply.http_status, %message, "login rejected");
                self.fail(message.clone());
                RequestOutcome::Failure(message)
            }
            Err(e) => {
                // Unreadable replies surface the same way as dropped connections
                tracing::warn!(error = %e, "login request failed");
                self.fail(NETWORK_ERROR_MESSAGE.to_string());
                RequestOutcome::NetworkError
            }
        }
    }

    fn fail(&mut self, message: String) {
        self.state = LoginState::Failed;
        self.error = Some(message);
    }

    pub fn view(&self) -> LoginView<'_> {
        let submitting = self.is_submitting();
        LoginView {
            username: &self.username,
            password: &self.password,
            error: self.error(),
            button_label: if submitting {
                SUBMITTING_LABEL
            } else {
                LOGIN_LABEL
            },
            button_enabled: !submitting,
            active_field: self.active_field_index,
        }
    }
}

impl Form for LoginController {
    fn field_count(&self) -> usize {
        3 // username, password, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(2);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.username),
            1 => Some(&self.password),
            _ => None,
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.username),
            1 => Some(&mut self.password),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{BackendApi, MockBackendApi};
    use pretty_assertions::assert_eq;

    const DASHBOARD: &str = "/admin/dashboard";

    fn controller(username: &str, password: &str) -> LoginController {
        let mut controller = LoginController::new(DASHBOARD);
        controller.set_username(username);
        controller.set_password(password);
        controller
    }

    fn reply(status: u16, body: &str) -> Result<ApiReply<LoginReply>, BackendError> {
        Ok(ApiReply::new(status, serde_json::from_str(body).unwrap()))
    }

    mod guard {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_username_blocks_submit() {
            let mut login = controller("", "secret");
            assert!(login.begin_submit().is_none());
            assert_eq!(login.error(), Some("Please enter both username and password."));
            assert_eq!(login.state(), &LoginState::Idle);
        }

        #[test]
        fn test_whitespace_only_password_blocks_submit() {
            let mut login = controller("admin", "   ");
            assert!(login.begin_submit().is_none());
            assert_eq!(login.state(), &LoginState::Idle);
        }
    }

    mod transitions {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_begin_submit_trims_and_disables_button() {
            let mut login = controller("  admin  ", " pass123 ");
            let request = login.begin_submit().unwrap();

            assert_eq!(request.username, "admin");
            assert_eq!(request.password, "pass123");
            assert_eq!(login.state(), &LoginState::Submitting);

            let view = login.view();
            assert!(!view.button_enabled);
            assert_eq!(view.button_label, "Authenticating...");
        }

        #[test]
        fn test_begin_submit_clears_previous_error() {
            let mut login = controller("", "x");
            login.begin_submit();
            assert!(login.error().is_some());

            login.set_username("admin");
            login.begin_submit();
            assert!(login.error().is_none());
        }

        #[test]
        fn test_second_submit_while_in_flight_is_ignored() {
            let mut login = controller("admin", "pass");
            assert!(login.begin_submit().is_some());
            assert!(login.begin_submit().is_none());
            assert_eq!(login.state(), &LoginState::Submitting);
        }

        #[test]
        fn test_success_navigates_to_dashboard() {
            let mut login = controller("admin", "pass");
            login.begin_submit();
            let outcome = login.finish_submit(reply(200, r#"{"status": "success"}"#));

            assert_eq!(outcome, RequestOutcome::Success);
            assert_eq!(login.redirect(), Some("/admin/dashboard"));
        }

        #[test]
        fn test_success_body_with_error_status_fails() {
            let mut login = controller("admin", "pass");
            login.begin_submit();
            login.finish_submit(reply(500, r#"{"status": "success"}"#));

            assert_eq!(login.state(), &LoginState::Failed);
            assert_eq!(login.error(), Some(LOGIN_FAILED_MESSAGE));
        }

        #[test]
        fn test_backend_error_message_shown() {
            let mut login = controller("admin", "wrong");
            login.begin_submit();
            let outcome =
                login.finish_submit(reply(401, r#"{"error": "authentication failure"}"#));

            assert_eq!(
                outcome,
                RequestOutcome::Failure("authentication failure".to_string())
            );
            assert_eq!(login.error(), Some("authentication failure"));

            let view = login.view();
            assert!(view.button_enabled);
            assert_eq!(view.button_label, "Login");
        }

        #[test]
        fn test_missing_error_uses_generic_message() {
            let mut login = controller("admin", "pass");
            login.begin_submit();
            login.finish_submit(reply(200, r#"{"status": "pending"}"#));
            assert_eq!(login.error(), Some("Login failed. Please try again."));
        }

        #[test]
        fn test_transport_error_shows_network_message() {
            let mut login = controller("admin", "pass");
            login.begin_submit();
            let outcome =
                login.finish_submit(Err(BackendError::Transport("connection refused".into())));

            assert_eq!(outcome, RequestOutcome::NetworkError);
            assert_eq!(login.state(), &LoginState::Failed);
            assert_eq!(login.error(), Some("Network error. Please try again."));
            assert!(login.view().button_enabled);
        }

        #[test]
        fn test_unreadable_reply_shows_network_message() {
            let mut login = controller("admin", "pass");
            login.begin_submit();
            login.finish_submit(Err(BackendError::Decode("expected value".into())));
            assert_eq!(login.error(), Some(NETWORK_ERROR_MESSAGE));
        }

        #[test]
        fn test_retry_after_failure() {
            let mut login = controller("admin", "pass");
            login.begin_submit();
            login.finish_submit(Err(BackendError::Transport("reset".into())));
            assert!(login.begin_submit().is_some());
            assert!(login.error().is_none());
        }
    }

    #[test]
    fn test_submit_through_mock_backend() {
        let mut mock = MockBackendApi::new();
        mock.expect_login()
            .withf(|request| request.username == "admin" && request.password == "pass123")
            .times(1)
            .returning(|_| {
                Ok(ApiReply::new(
                    200,
                    LoginReply {
                        status: Some("success".to_string()),
                        error: None,
                    },
                ))
            });

        let mut login = controller("admin", "pass123");
        let request = login.begin_submit().unwrap();
        let result = tokio_test::block_on(mock.login(&request));
        let outcome = login.finish_submit(result);

        assert_eq!(outcome, RequestOutcome::Success);
        assert_eq!(
            login.state(),
            &LoginState::Succeeded {
                redirect: "/admin/dashboard".to_string()
            }
        );
    }

    #[test]
    fn test_password_field_is_secret() {
        let login = LoginController::new(DASHBOARD);
        assert!(login.view().password.is_secret);
        assert!(!login.view().username.is_secret);
    }
}
