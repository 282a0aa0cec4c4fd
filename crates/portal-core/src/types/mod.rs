//! Wire types shared between the portal crates and the backend API.

pub mod response;
pub mod role;
pub mod user;

pub use response::{ApiErrorBody, ApiResponse};
pub use role::Role;
pub use user::{LoginResponse, User, UserProfile, WarehouseSummary};
