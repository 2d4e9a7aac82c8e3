//! Errors raised at the backend boundary

use thiserror::Error;

/// Failure of a single backend request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The request never completed (connection refused, timeout, reset)
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status
    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The reply body did not have the expected shape
    #[error("unexpected reply shape: {0}")]
    Decode(String),
}

impl BackendError {
    /// True when the request never reached a reply
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::Decode(error.to_string())
        } else {
            Self::Transport(error.to_string())
        }
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error.to_string())
    }
}
