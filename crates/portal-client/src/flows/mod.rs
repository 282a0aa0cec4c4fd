//! What the login, registration and logout pages do on submit.
//!
//! Each flow takes a navigation ticket before its first await so a result
//! that arrives after the user moved on does not navigate.

pub mod login;
pub mod logout;
pub mod register;

pub use login::{LOGIN_FAILED, LoginFlow, LoginOutcome};
pub use logout::LogoutFlow;
pub use register::{REGISTER_FAILED, RegisterFlow};
