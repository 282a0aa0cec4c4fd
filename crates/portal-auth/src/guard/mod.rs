//! Route guarding for the two portals.

pub mod route;
pub mod route_guard;

pub use route::RouteScope;
pub use route_guard::{GuardDecision, RouteGuard};
