//! # portal-store
//!
//! Key-value backends that hold the persisted session. Supports two modes:
//!
//! - **memory**: process-local map, the equivalent of a single browser tab
//! - **file**: JSON object on disk that survives restarts, the equivalent of
//!   browser local storage
//!
//! The backend is selected at runtime based on configuration.

pub mod file;
pub mod keys;
pub mod memory;
pub mod provider;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use provider::StoreManager;
