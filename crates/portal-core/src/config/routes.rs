//! Portal route paths.

use serde::{Deserialize, Serialize};

use crate::types::Role;

/// Paths of the portal pages the guard and the flows navigate between.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutesConfig {
    /// Admin portal landing page.
    #[serde(default = "default_admin_home")]
    pub admin_home: String,
    /// Admin login page.
    #[serde(default = "default_admin_login")]
    pub admin_login: String,
    /// Staff portal landing page.
    #[serde(default = "default_staff_home")]
    pub staff_home: String,
    /// Staff login page.
    #[serde(default = "default_staff_login")]
    pub staff_login: String,
    /// Staff self-registration page.
    #[serde(default = "default_staff_register")]
    pub staff_register: String,
    /// Fallback destination when nothing better is known.
    #[serde(default = "default_home")]
    pub home: String,
}

impl RoutesConfig {
    /// Landing page of the given role's portal.
    pub fn home_for(&self, role: Role) -> &str {
        match role {
            Role::Admin => &self.admin_home,
            Role::Staff => &self.staff_home,
        }
    }

    /// Login page of the given role's portal.
    pub fn login_for(&self, role: Role) -> &str {
        match role {
            Role::Admin => &self.admin_login,
            Role::Staff => &self.staff_login,
        }
    }
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            admin_home: default_admin_home(),
            admin_login: default_admin_login(),
            staff_home: default_staff_home(),
            staff_login: default_staff_login(),
            staff_register: default_staff_register(),
            home: default_home(),
        }
    }
}

fn default_admin_home() -> String {
    "/admin".to_string()
}

fn default_admin_login() -> String {
    "/admin/login".to_string()
}

fn default_staff_home() -> String {
    "/staff".to_string()
}

fn default_staff_login() -> String {
    "/staff/login".to_string()
}

fn default_staff_register() -> String {
    "/staff/register".to_string()
}

fn default_home() -> String {
    "/".to_string()
}
