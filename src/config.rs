//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default backend address (Flask development server)
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

/// Where a successful admin login navigates to
pub const DEFAULT_DASHBOARD_PATH: &str = "/admin/dashboard";

/// Environment variable overriding the configured backend address
pub const BACKEND_URL_ENV: &str = "RECHARGE_BACKEND_URL";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Backend base URL
    pub backend_url: Option<String>,
    /// Path a successful login navigates to
    pub dashboard_path: Option<String>,
    /// Client-wide request timeout; requests never time out when unset
    pub request_timeout_secs: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("ie", "recharge", "recharge-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Backend address: environment, then config file, then default
    pub fn backend_url(&self) -> String {
        self.resolve_backend_url(std::env::var(BACKEND_URL_ENV).ok())
    }

    fn resolve_backend_url(&self, from_env: Option<String>) -> String {
        from_env
            .filter(|url| !url.trim().is_empty())
            .or_else(|| self.backend_url.clone())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
    }

    pub fn dashboard_path(&self) -> &str {
        self.dashboard_path
            .as_deref()
            .unwrap_or(DEFAULT_DASHBOARD_PATH)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}
