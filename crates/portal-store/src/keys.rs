//! Key names of the persisted session entries.
//!
//! The three entries are written and removed independently.

/// Bearer token sent with every API request.
pub const ACCESS_TOKEN: &str = "accessToken";

/// Token exchanged for a new access token.
pub const REFRESH_TOKEN: &str = "refreshToken";

/// JSON-encoded user record returned at login.
pub const USER: &str = "user";

/// Every session key, in the order they are cleared.
pub const SESSION_KEYS: [&str; 3] = [ACCESS_TOKEN, REFRESH_TOKEN, USER];
