//! The portal, wired together from configuration.

use std::sync::Arc;

use tracing::info;

use portal_auth::{Navigation, RouteGuard, SessionOracle, SessionRepository, TokenStore};
use portal_core::config::AppConfig;
use portal_core::result::AppResult;
use portal_core::traits::{KeyValueStore, Navigator};
use portal_core::types::Role;
use portal_store::StoreManager;

use crate::client::ApiClient;
use crate::flows::{LoginFlow, LogoutFlow, RegisterFlow};
use crate::services::{ProfileService, WarehouseService};

/// Shared handles every portal page works with.
///
/// All parts see the same session and the same navigation generations.
#[derive(Debug, Clone)]
pub struct Portal {
    config: Arc<AppConfig>,
    client: ApiClient,
    oracle: SessionOracle,
    guard: RouteGuard,
}

impl Portal {
    /// Builds the portal over an explicit store backend.
    pub fn new(
        config: AppConfig,
        store: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
    ) -> AppResult<Self> {
        let backend = store.backend_name().to_string();
        let session: Arc<dyn SessionRepository> = Arc::new(TokenStore::new(store));
        let navigation = Navigation::new(navigator);

        let client = ApiClient::new(
            &config.api,
            config.routes.clone(),
            session.clone(),
            navigation,
        )?;
        let oracle = SessionOracle::new(session);
        let guard = RouteGuard::new(oracle.clone(), config.routes.clone());

        info!(
            base_url = %config.api.base_url,
            store = %backend,
            single_flight = config.api.single_flight_refresh,
            "Portal initialized"
        );

        Ok(Self {
            config: Arc::new(config),
            client,
            oracle,
            guard,
        })
    }

    /// Builds the portal over the store backend named in `config.storage`.
    pub fn from_config(config: AppConfig, navigator: Arc<dyn Navigator>) -> AppResult<Self> {
        let store: Arc<dyn KeyValueStore> = Arc::new(StoreManager::new(&config.storage));
        Self::new(config, store, navigator)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn oracle(&self) -> &SessionOracle {
        &self.oracle
    }

    pub fn guard(&self) -> &RouteGuard {
        &self.guard
    }

    pub fn profile(&self) -> ProfileService {
        ProfileService::new(self.client.clone())
    }

    pub fn warehouses(&self) -> WarehouseService {
        WarehouseService::new(self.client.clone())
    }

    pub fn login(&self, portal: Role) -> LoginFlow {
        LoginFlow::for_portal(self.client.clone(), portal)
    }

    pub fn register(&self) -> RegisterFlow {
        RegisterFlow::new(self.client.clone())
    }

    pub fn logout(&self) -> LogoutFlow {
        LogoutFlow::new(self.client.clone())
    }
}
