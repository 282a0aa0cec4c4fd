//! # portal-auth
//!
//! Client-side session handling for the Gudang portal.
//!
//! ## Modules
//!
//! - `jwt`: unverified bearer token decoding and claims
//! - `session`: persisted token store and the session oracle
//! - `guard`: per-portal route guard run before a page renders
//! - `navigation`: navigation generations that let late completions be discarded
//!
//! Everything here is a UI-routing hint. Token signatures are never checked
//! on the client; every privileged backend endpoint re-validates the bearer
//! token itself.

pub mod guard;
pub mod jwt;
pub mod navigation;
pub mod session;

pub use guard::{GuardDecision, RouteGuard, RouteScope};
pub use jwt::{Claims, DecodeError, JwtDecoder};
pub use navigation::{Navigation, NavigationTicket, RecordingNavigator};
pub use session::{Session, SessionOracle, SessionRepository, TokenStore};
