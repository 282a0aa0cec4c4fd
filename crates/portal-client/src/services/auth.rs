//! Login, registration and logout calls.

use tracing::{info, warn};

use portal_core::result::AppResult;
use portal_core::types::{ApiResponse, LoginResponse};

use crate::client::ApiClient;
use crate::dto::{LoginRequest, LogoutRequest, RegisterRequest, validate_request};
use crate::endpoints::auth;
use crate::request::ApiRequest;

/// Auth endpoints. Persisting the returned session is left to the caller.
#[derive(Debug, Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Authenticates a user and returns the new tokens.
    pub async fn login(&self, request: &LoginRequest) -> AppResult<LoginResponse> {
        validate_request(request)?;
        info!(username = %request.username, "Logging in");
        let response: ApiResponse<LoginResponse> = self.client.post(auth::LOGIN, request).await?;
        Ok(response.data)
    }

    /// Creates a staff account.
    pub async fn register(&self, request: &RegisterRequest) -> AppResult<LoginResponse> {
        validate_request(request)?;
        info!(username = %request.username, warehouse_id = ?request.warehouse_id, "Registering");
        let response: ApiResponse<LoginResponse> =
            self.client.post(auth::REGISTER, request).await?;
        Ok(response.data)
    }

    /// Asks the server to revoke the stored refresh token. Never fails.
    pub async fn logout_api(&self) {
        let body = LogoutRequest {
            refresh_token: self.client.session().refresh_token().await,
        };
        let request = match ApiRequest::post(auth::LOGOUT).json(&body) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Failed to encode logout request");
                return;
            }
        };
        if let Err(e) = self.client.execute(request).await {
            warn!(error = %e, "Logout call failed");
        }
    }
}
