//! Profile of the signed-in user.

use tracing::info;

use portal_core::error::AppError;
use portal_core::result::AppResult;
use portal_core::types::{ApiResponse, UserProfile};

use crate::client::ApiClient;
use crate::dto::{MessageResponse, UpdateProfileRequest};
use crate::endpoints::auth;

/// Profile endpoints.
#[derive(Debug, Clone)]
pub struct ProfileService {
    client: ApiClient,
}

impl ProfileService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_me(&self) -> AppResult<UserProfile> {
        let response: ApiResponse<UserProfile> = self.client.get(auth::PROFILE).await?;
        Ok(response.data)
    }

    /// Updates the profile and returns the server's message.
    pub async fn update_me(&self, password: Option<String>) -> AppResult<String> {
        let body = UpdateProfileRequest { password };
        let reply: MessageResponse = self.client.put(auth::PROFILE, &body).await?;
        info!("Profile updated");
        Ok(reply.message)
    }

    /// Changes the password after checking the confirmation matches.
    ///
    /// An empty password leaves it unchanged.
    pub async fn change_password(&self, password: &str, confirm: &str) -> AppResult<String> {
        if password != confirm {
            return Err(AppError::validation("Passwords do not match"));
        }
        let password = (!password.is_empty()).then(|| password.to_string());
        self.update_me(password).await
    }
}
