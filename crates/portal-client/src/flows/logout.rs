//! Logout from either portal.

use tracing::info;

use portal_core::types::Role;

use crate::client::ApiClient;
use crate::services::AuthService;

/// Logout button of a portal.
#[derive(Debug, Clone)]
pub struct LogoutFlow {
    client: ApiClient,
    auth: AuthService,
}

impl LogoutFlow {
    pub fn new(client: ApiClient) -> Self {
        Self {
            auth: AuthService::new(client.clone()),
            client,
        }
    }

    /// Revokes the session server-side if possible, always clears it
    /// locally, then goes to `portal`'s login page.
    pub async fn submit(&self, portal: Role) {
        self.auth.logout_api().await;
        self.client.session().clear().await;
        info!(portal = %portal, "Logged out");

        let login = self.client.routes().login_for(portal).to_string();
        self.client.navigation().force(&login);
    }
}
