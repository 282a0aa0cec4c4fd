//! Key-value store trait backing the persisted session.

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for string key-value backends (in-memory map, JSON file).
///
/// Mirrors the contract of browser local storage: flat string keys, string
/// values, last writer wins. Values that need structure are stored as JSON.
#[async_trait]
pub trait KeyValueStore: Send + Sync + std::fmt::Debug + 'static {
    /// Get a value by key. Returns `None` if the key does not exist.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Set a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove a key. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> AppResult<()>;

    /// Short backend name for logs.
    fn backend_name(&self) -> &str;
}
