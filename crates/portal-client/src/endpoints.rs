//! Backend endpoint paths, relative to the configured base URL.

/// Authentication endpoints.
pub mod auth {
    pub const LOGIN: &str = "/auth/login";
    pub const REGISTER: &str = "/auth/register";
    pub const REFRESH: &str = "/auth/refresh";
    pub const LOGOUT: &str = "/auth/logout";
    pub const PROFILE: &str = "/auth/profile";
}

/// Warehouse endpoints.
pub mod warehouses {
    /// Public list offered on the registration form.
    pub const PUBLIC_LIST: &str = "/warehouses/list";
}

/// Whether `path` is a login or registration call.
///
/// A 401 from these means bad credentials, not an expired session, so it is
/// never answered with a refresh.
pub fn is_auth_call(path: &str) -> bool {
    path.contains(auth::LOGIN) || path.contains(auth::REGISTER)
}
