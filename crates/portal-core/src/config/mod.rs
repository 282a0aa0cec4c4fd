//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every field carries a default so an empty file is valid.

pub mod api;
pub mod logging;
pub mod routes;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use self::api::ApiConfig;
pub use self::logging::LoggingConfig;
pub use self::routes::RoutesConfig;
pub use self::storage::{StorageBackend, StorageConfig};

use crate::error::AppError;

/// Prefix for environment variable overrides (`GUDANG__API__BASE_URL`).
const ENV_PREFIX: &str = "GUDANG";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend API settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Session store settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Portal route paths.
    #[serde(default)]
    pub routes: RoutesConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// Merges the base file with an optional `config/{env}` overlay and
    /// environment variables prefixed with `GUDANG__`. Missing files are not
    /// an error.
    pub fn load(path: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
