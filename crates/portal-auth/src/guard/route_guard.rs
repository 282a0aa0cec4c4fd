//! Route guard: decides, before a page renders, whether the session may see it.

use tracing::debug;

use portal_core::config::RoutesConfig;
use portal_core::types::Role;

use crate::session::SessionOracle;

use super::route::RouteScope;

/// Outcome of a guard check.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested page.
    Allow,
    /// Go to this path instead.
    Redirect(String),
}

impl GuardDecision {
    /// Redirect target, if any.
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Allow => None,
            Self::Redirect(to) => Some(to),
        }
    }
}

/// Per-portal gate run before rendering.
///
/// Clears the stored session whenever it finds one it cannot route.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    oracle: SessionOracle,
    routes: RoutesConfig,
}

impl RouteGuard {
    /// Creates a guard over `oracle` using the configured portal paths.
    pub fn new(oracle: SessionOracle, routes: RoutesConfig) -> Self {
        Self { oracle, routes }
    }

    /// Checks whatever page `path` leads to.
    pub async fn check(&self, path: &str) -> GuardDecision {
        let decision = match RouteScope::classify(path, &self.routes) {
            RouteScope::Portal(portal) => self.enter_portal(portal).await,
            RouteScope::Entry(_) => self.enter_login_page().await,
            RouteScope::Public => GuardDecision::Allow,
        };
        debug!(path, ?decision, "Route guard decision");
        decision
    }

    /// Guard for every page in `portal`'s tree.
    ///
    /// A session of the other role is sent to its own portal; a session with
    /// no usable role is cleared and sent to this portal's login page.
    pub async fn enter_portal(&self, portal: Role) -> GuardDecision {
        let login = self.routes.login_for(portal).to_string();

        if !self.oracle.is_authenticated().await {
            self.oracle.clear().await;
            return GuardDecision::Redirect(login);
        }

        match self.oracle.role().await {
            Some(role) if role == portal => GuardDecision::Allow,
            Some(other) => GuardDecision::Redirect(self.routes.home_for(other).to_string()),
            None => {
                self.oracle.clear().await;
                GuardDecision::Redirect(login)
            }
        }
    }

    /// Guard for login and registration pages of either portal.
    ///
    /// Signed-in users go straight to their own portal. Anything left in the
    /// store that cannot be routed is cleared and the page renders.
    pub async fn enter_login_page(&self) -> GuardDecision {
        if self.oracle.is_authenticated().await {
            if let Some(role) = self.oracle.role().await {
                return GuardDecision::Redirect(self.routes.home_for(role).to_string());
            }
        }
        self.oracle.clear().await;
        GuardDecision::Allow
    }

    /// The portal paths this guard routes between.
    pub fn routes(&self) -> &RoutesConfig {
        &self.routes
    }
}
