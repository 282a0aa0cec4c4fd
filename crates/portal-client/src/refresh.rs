//! The token refresh call.
//!
//! Sent on its own HTTP client so a 401 here can never re-enter the
//! refresh protocol.

use std::time::Duration;

use tracing::debug;

use portal_core::config::ApiConfig;
use portal_core::error::AppError;
use portal_core::result::AppResult;
use portal_core::types::ApiResponse;

use crate::dto::{RefreshRequest, RefreshResponse};
use crate::endpoints;
use crate::error::{api_error, transport_error};

/// Exchanges a refresh token for a new access token.
#[derive(Debug, Clone)]
pub struct RefreshClient {
    http: reqwest::Client,
    url: String,
}

impl RefreshClient {
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build refresh client: {e}")))?;

        Ok(Self {
            http,
            url: format!(
                "{}{}",
                config.refresh_base_url().trim_end_matches('/'),
                endpoints::auth::REFRESH
            ),
        })
    }

    /// Posts `{token}` and returns the new access token.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<String> {
        debug!(url = %self.url, "Requesting new access token");

        let response = self
            .http
            .post(&self.url)
            .json(&RefreshRequest {
                token: refresh_token.to_string(),
            })
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(transport_error)?;
        if !status.is_success() {
            return Err(api_error(status, &bytes));
        }

        let envelope: ApiResponse<RefreshResponse> = serde_json::from_slice(&bytes)?;
        Ok(envelope.data.access_token)
    }
}
