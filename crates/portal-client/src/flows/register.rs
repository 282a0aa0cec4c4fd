//! Staff self-registration.

use tracing::info;

use portal_core::result::AppResult;
use portal_core::types::User;

use crate::client::ApiClient;
use crate::dto::RegisterRequest;
use crate::services::AuthService;

/// Shown when a failed registration carries no server message.
pub const REGISTER_FAILED: &str = "Registration failed";

/// Registration form of the staff portal.
#[derive(Debug, Clone)]
pub struct RegisterFlow {
    client: ApiClient,
    auth: AuthService,
}

impl RegisterFlow {
    pub fn new(client: ApiClient) -> Self {
        Self {
            auth: AuthService::new(client.clone()),
            client,
        }
    }

    /// Registers a staff account and sends the user to the staff login.
    ///
    /// The returned tokens are not kept; the new user signs in explicitly.
    pub async fn submit(
        &self,
        username: &str,
        password: &str,
        warehouse_id: Option<i64>,
    ) -> AppResult<User> {
        let ticket = self.client.navigation().ticket();
        let mut request = RegisterRequest::new(username, password);
        request.warehouse_id = warehouse_id;

        let data = self
            .auth
            .register(&request)
            .await
            .map_err(|e| e.into_user_facing(REGISTER_FAILED))?;
        info!(username, "Registration succeeded");

        let login = self.client.routes().staff_login.clone();
        self.client.navigation().navigate(ticket, &login);
        Ok(data.user)
    }
}
