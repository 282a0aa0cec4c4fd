//! User-facing records exchanged with the auth endpoints.

use serde::{Deserialize, Serialize};

use super::role::Role;

/// The user record returned with a login and cached next to the tokens.
///
/// `role` is kept as the raw string so a record carrying a role this client
/// does not know still parses; use [`User::role`] for the typed view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub username: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl User {
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }
}

/// Payload of a successful login or registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
}

/// Warehouse a staff member is assigned to, or one offered at registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Profile of the signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, alias = "userId", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub username: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warehouse: Option<WarehouseSummary>,
}

impl UserProfile {
    /// Role as displayed: `staff_gudang` becomes `staff gudang`.
    pub fn role_display(&self) -> String {
        self.role.replace('_', " ")
    }
}
