//! Request and response bodies of the auth endpoints.

pub mod request;
pub mod response;

pub use request::{
    LoginRequest, LogoutRequest, RefreshRequest, RegisterRequest, UpdateProfileRequest,
    validate_request,
};
pub use response::{MessageResponse, RefreshResponse};
