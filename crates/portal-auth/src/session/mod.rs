//! Persisted session and the oracle that answers questions about it.

pub mod oracle;
pub mod store;

pub use oracle::SessionOracle;
pub use store::{Session, SessionRepository, TokenStore};
