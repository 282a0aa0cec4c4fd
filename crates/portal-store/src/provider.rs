//! Store manager that dispatches to the configured backend.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use portal_core::config::{StorageBackend, StorageConfig};
use portal_core::result::AppResult;
use portal_core::traits::store::KeyValueStore;

use crate::file::FileStore;
use crate::memory::MemoryStore;

/// Store manager that wraps the configured key-value backend.
///
/// The backend is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct StoreManager {
    inner: Arc<dyn KeyValueStore>,
}

impl StoreManager {
    /// Create a new store manager from configuration.
    pub fn new(config: &StorageConfig) -> Self {
        let inner: Arc<dyn KeyValueStore> = match config.backend {
            StorageBackend::Memory => {
                info!("Initializing in-memory session store");
                Arc::new(MemoryStore::new())
            }
            StorageBackend::File => {
                info!(path = %config.path, "Initializing file session store");
                Arc::new(FileStore::new(&config.path))
            }
        };

        Self { inner }
    }
}

#[async_trait]
impl KeyValueStore for StoreManager {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.inner.remove(key).await
    }

    fn backend_name(&self) -> &str {
        self.inner.backend_name()
    }
}
