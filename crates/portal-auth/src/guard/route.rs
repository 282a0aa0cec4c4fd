//! Classification of portal paths.

use portal_core::config::RoutesConfig;
use portal_core::types::Role;

/// What kind of page a path leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteScope {
    /// A page inside a role's portal tree.
    Portal(Role),
    /// A login or registration page belonging to a role's portal.
    Entry(Role),
    /// Anything else; never guarded.
    Public,
}

impl RouteScope {
    /// Classifies `path` against the configured portal routes.
    ///
    /// Query strings, fragments and trailing slashes are ignored.
    pub fn classify(path: &str, routes: &RoutesConfig) -> Self {
        let path = normalize(path);

        if path == normalize(&routes.admin_login) {
            return Self::Entry(Role::Admin);
        }
        if path == normalize(&routes.staff_login) || path == normalize(&routes.staff_register) {
            return Self::Entry(Role::Staff);
        }
        if within(path, &routes.admin_home) {
            return Self::Portal(Role::Admin);
        }
        if within(path, &routes.staff_home) {
            return Self::Portal(Role::Staff);
        }
        Self::Public
    }
}

fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

fn within(path: &str, root: &str) -> bool {
    let root = normalize(root);
    if root == "/" {
        return false;
    }
    path == root
        || path
            .strip_prefix(root)
            .is_some_and(|rest| rest.starts_with('/'))
}
