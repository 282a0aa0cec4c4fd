//! Typed wrappers for the backend endpoints.

pub mod auth;
pub mod profile;
pub mod warehouse;

pub use auth::AuthService;
pub use profile::ProfileService;
pub use warehouse::WarehouseService;
