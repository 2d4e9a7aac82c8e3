//! Application state definitions

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Recharge form, with the onboarding modal on top until it is done
    #[default]
    Recharge,
    AdminLogin,
    /// Reached after a successful login
    Dashboard,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Recharge => "Mobile Recharge",
            Self::AdminLogin => "Admin Login",
            Self::Dashboard => "Admin Dashboard",
        }
    }

    /// Views that appear as header tabs, in order
    pub fn tabs() -> [View; 2] {
        [View::Recharge, View::AdminLogin]
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // Backend
    pub backend_url: String,
    /// Full URL the last successful login redirected to
    pub dashboard_url: Option<String>,

    // UI state
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
            ..Default::default()
        }
    }

    /// Switch view, remembering where we came from.
    ///
    /// Returning to a view already in the history unwinds back to it, so the
    /// history never holds a view twice.
    pub fn navigate(&mut self, view: View) {
        if self.current_view == view {
            return;
        }
        if let Some(pos) = self.view_history.iter().position(|v| *v == view) {
            self.view_history.truncate(pos);
            self.current_view = view;
            return;
        }
        let previous = std::mem::replace(&mut self.current_view, view);
        self.view_history.push(previous);
    }

    /// Return to the previous view, or the recharge form
    pub fn go_back(&mut self) {
        self.current_view = self.view_history.pop().unwrap_or_default();
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
