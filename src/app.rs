//! Application state and core logic

use crate::backend::{BackendApi, BackendClient};
use crate::config::TuiConfig;
use crate::controller::{
    CompletedRequest, LoginController, OnboardingAction, PendingRequest,
    ProfileOnboardingController, RechargeFormValidator, RequestOutcome, RequestOwner,
};
use crate::state::{AppState, Form, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    pub recharge: RechargeFormValidator,
    pub login: LoginController,
    pub onboarding: ProfileOnboardingController,
    /// Backend shared with the request tasks
    backend: Arc<dyn BackendApi>,
    /// Requests waiting for `dispatch_queued`
    queued: Vec<PendingRequest>,
    /// Requests queued or running, at most one per owner
    in_flight: Vec<PendingRequest>,
    completed_tx: mpsc::UnboundedSender<CompletedRequest>,
    completed_rx: mpsc::UnboundedReceiver<CompletedRequest>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App talking to the configured backend
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let client = BackendClient::new(&config.backend_url(), config.request_timeout())?;
        let backend_url = client.base_url().to_string();
        tracing::info!(%backend_url, "using backend");

        Ok(Self::with_backend(
            Arc::new(client),
            backend_url,
            config.dashboard_path(),
        ))
    }

    pub fn with_backend(
        backend: Arc<dyn BackendApi>,
        backend_url: impl Into<String>,
        dashboard_path: &str,
    ) -> Self {
        let (completed_tx, completed_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(backend_url),
            recharge: RechargeFormValidator::new(),
            login: LoginController::new(dashboard_path),
            onboarding: ProfileOnboardingController::new(),
            backend,
            queued: Vec::new(),
            in_flight: Vec::new(),
            completed_tx,
            completed_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Requests sent or about to be sent, oldest first
    pub fn in_flight(&self) -> &[PendingRequest] {
        &self.in_flight
    }

    /// True while `owner` is waiting for a reply
    pub fn is_busy(&self, owner: RequestOwner) -> bool {
        self.in_flight.iter().any(|request| request.owner() == owner)
    }

    /// True while the onboarding modal owns the recharge view
    pub fn is_modal_open(&self) -> bool {
        matches!(self.state.current_view, View::Recharge) && self.onboarding.is_visible()
    }

    /// Handle a key press.
    ///
    /// Ctrl+C and view switching always work. A controller waiting for a
    /// reply ignores its own input; the others stay usable.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match key.code {
            KeyCode::F(1) => {
                self.state.navigate(View::Recharge);
                return;
            }
            KeyCode::F(2) => {
                self.state.navigate(View::AdminLogin);
                return;
            }
            _ => {}
        }

        match self.state.current_view {
            View::Recharge if self.onboarding.is_visible() => {
                if !self.is_busy(RequestOwner::Onboarding) {
                    self.handle_onboarding_key(key);
                }
            }
            View::Recharge => self.handle_recharge_key(key),
            View::AdminLogin => self.handle_login_key(key),
            View::Dashboard => self.handle_dashboard_key(key),
        }
    }

    fn handle_recharge_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.recharge.next_field(),
            KeyCode::BackTab => self.recharge.prev_field(),
            KeyCode::Enter if self.recharge.is_buttons_row_active() => self.initiate_recharge(),
            KeyCode::Enter => self.recharge.next_field(),
            KeyCode::Char(c) => self.recharge.input_char(c),
            KeyCode::Backspace => self.recharge.backspace(),
            _ => {}
        }
    }

    fn initiate_recharge(&mut self) {
        // Disabled button: nothing happens
        let Some(request) = self.recharge.initiate() else {
            return;
        };
        tracing::info!(mobile = %request.mobile, amount = request.amount, "recharge requested");
        self.state.set_status(format!(
            "Recharge of {} ready for {}",
            request.amount, request.mobile
        ));
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.state.go_back();
            return;
        }
        if self.is_busy(RequestOwner::Login) {
            return;
        }

        match key.code {
            KeyCode::Tab => self.login.next_field(),
            KeyCode::BackTab => self.login.prev_field(),
            KeyCode::Enter => {
                if let Some(request) = self.login.begin_submit() {
                    self.queue(PendingRequest::Login(request));
                }
            }
            KeyCode::Char(c) => self.login.input_char(c),
            KeyCode::Backspace => self.login.backspace(),
            _ => {}
        }
    }

    fn handle_onboarding_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.onboarding.next_field(),
            KeyCode::BackTab => self.onboarding.prev_field(),
            KeyCode::Enter => self.activate_onboarding(),
            KeyCode::Char(c) => self.onboarding.input_char(c),
            KeyCode::Backspace => self.onboarding.backspace(),
            _ => {}
        }
    }

    fn activate_onboarding(&mut self) {
        let request = match self.onboarding.action() {
            Some(OnboardingAction::Continue) => self
                .onboarding
                .begin_continue()
                .map(PendingRequest::CheckMobile),
            Some(OnboardingAction::Create) => self
                .onboarding
                .begin_create()
                .map(PendingRequest::CreateProfile),
            None => None,
        };
        if let Some(request) = request {
            self.queue(request);
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.state.navigate(View::Recharge);
        }
    }

    fn queue(&mut self, request: PendingRequest) {
        self.state.clear_status();
        self.in_flight.push(request.clone());
        self.queued.push(request);
    }

    /// Spawn a task for every queued request. Replies come back through
    /// `apply_completed`.
    pub fn dispatch_queued(&mut self) {
        for request in self.queued.drain(..) {
            tracing::debug!(request = request.describe(), "sending request");
            let backend = Arc::clone(&self.backend);
            let completed_tx = self.completed_tx.clone();
            tokio::spawn(async move {
                let completed = request.send(backend.as_ref()).await;
                // The receiver lives as long as the App
                let _ = completed_tx.send(completed);
            });
        }
    }

    /// Apply every reply that has arrived, without waiting for more
    pub fn apply_completed(&mut self) {
        while let Ok(completed) = self.completed_rx.try_recv() {
            self.apply(completed);
        }
    }

    fn apply(&mut self, completed: CompletedRequest) {
        let owner = completed.owner();
        self.in_flight.retain(|request| request.owner() != owner);

        match completed {
            CompletedRequest::Login(result) => {
                if self.login.finish_submit(result) == RequestOutcome::Success {
                    if let Some(path) = self.login.redirect() {
                        self.state.dashboard_url =
                            Some(format!("{}{}", self.state.backend_url, path));
                    }
                    self.state.navigate(View::Dashboard);
                    self.state.set_status("Signed in");
                }
            }
            CompletedRequest::CheckMobile { mobile, result } => {
                let outcome = self.onboarding.finish_continue(mobile, result);
                if outcome == RequestOutcome::Success && !self.onboarding.is_visible() {
                    self.state.set_status("Welcome back");
                }
            }
            CompletedRequest::CreateProfile(result) => {
                if self.onboarding.finish_create(result) == RequestOutcome::Success {
                    self.state.set_status("Profile created");
                }
            }
        }
    }
}
