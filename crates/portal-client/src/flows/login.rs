//! Portal login.

use tracing::{info, warn};

use portal_auth::Session;
use portal_core::error::AppError;
use portal_core::result::AppResult;
use portal_core::types::{Role, User};

use crate::client::ApiClient;
use crate::dto::LoginRequest;
use crate::services::AuthService;

/// Shown when a failed login carries no server message.
pub const LOGIN_FAILED: &str = "Login failed, check your credentials";

/// A completed login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: User,
    /// `false` when another navigation happened while the call was in flight.
    pub navigated: bool,
}

/// Login through one portal's form.
#[derive(Debug, Clone)]
pub struct LoginFlow {
    client: ApiClient,
    auth: AuthService,
    portal: Role,
    redirect: String,
}

impl LoginFlow {
    /// Login form of `portal`: other roles are refused and success lands on
    /// the portal home.
    pub fn for_portal(client: ApiClient, portal: Role) -> Self {
        let redirect = client.routes().home_for(portal).to_string();
        Self {
            auth: AuthService::new(client.clone()),
            client,
            portal,
            redirect,
        }
    }

    /// Logs in, persists the session and navigates to the portal.
    ///
    /// Errors carry a message ready to show the user.
    pub async fn submit(&self, username: &str, password: &str) -> AppResult<LoginOutcome> {
        let ticket = self.client.navigation().ticket();
        let request = LoginRequest::new(username, password);

        let data = self
            .auth
            .login(&request)
            .await
            .map_err(|e| e.into_user_facing(LOGIN_FAILED))?;

        let actual = data.user.role();
        if actual != Some(self.portal) {
            self.client.session().clear().await;
            let label = match actual {
                Some(Role::Admin) => Role::Admin.label(),
                _ => Role::Staff.label(),
            };
            warn!(username, role = %data.user.role, portal = %self.portal, "Role does not match portal");
            return Err(AppError::role_mismatch(format!(
                "Warning: {label} accounts cannot sign in through this portal!"
            )));
        }

        let session = Session::new(data.access_token, data.refresh_token, data.user.clone());
        self.client.session().save(&session).await?;
        info!(username, role = %data.user.role, "Login succeeded");

        let navigated = self.client.navigation().navigate(ticket, &self.redirect);
        Ok(LoginOutcome {
            user: data.user,
            navigated,
        })
    }
}
