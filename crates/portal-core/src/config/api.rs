//! Backend API client configuration.

use serde::{Deserialize, Serialize};

/// Settings for the outbound API client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Base URL for the token refresh call; `base_url` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_base_url: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Serialize concurrent token refreshes behind one lock.
    ///
    /// When disabled every request that sees a 401 refreshes on its own.
    #[serde(default = "default_true")]
    pub single_flight_refresh: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth_base_url: None,
            timeout_seconds: default_timeout(),
            single_flight_refresh: true,
        }
    }
}

impl ApiConfig {
    /// Base URL the refresh call is sent to.
    pub fn refresh_base_url(&self) -> &str {
        self.auth_base_url.as_deref().unwrap_or(&self.base_url)
    }
}

fn default_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_true() -> bool {
    true
}
