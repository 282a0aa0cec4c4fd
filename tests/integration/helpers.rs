//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::{Value, json};

use portal_auth::{RecordingNavigator, Session, SessionRepository};
use portal_client::Portal;
use portal_core::config::{AppConfig, StorageBackend};
use portal_core::types::User;
use portal_store::MemoryStore;

/// Address nothing listens on; requests to it fail without a response.
pub const UNREACHABLE: &str = "http://127.0.0.1:9";

/// Portal wired to a mock backend, an in-memory store and a navigator that
/// only records.
pub struct TestPortal {
    pub portal: Portal,
    pub store: MemoryStore,
    pub navigator: Arc<RecordingNavigator>,
    pub server: mockito::ServerGuard,
}

impl TestPortal {
    /// Portal with default settings against a fresh mock server.
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Portal whose configuration is adjusted by `configure` after the base
    /// URL is pointed at the mock server.
    pub async fn with_config(configure: impl FnOnce(&mut AppConfig)) -> Self {
        let server = mockito::Server::new_async().await;

        let mut config = AppConfig::default();
        config.api.base_url = server.url();
        config.api.timeout_seconds = 5;
        config.storage.backend = StorageBackend::Memory;
        configure(&mut config);

        let store = MemoryStore::new();
        let navigator = Arc::new(RecordingNavigator::new());
        let portal = Portal::new(config, Arc::new(store.clone()), navigator.clone())
            .expect("Failed to build portal");

        Self {
            portal,
            store,
            navigator,
            server,
        }
    }

    pub fn session(&self) -> &Arc<dyn SessionRepository> {
        self.portal.client().session()
    }

    /// Stores a session for `role` with access token `access` and refresh
    /// token `refresh-1`.
    pub async fn sign_in_with(&self, role: &str, access: &str) {
        self.session()
            .save(&Session::new(access, "refresh-1", user(role)))
            .await
            .expect("Failed to save session");
    }

    /// Stores a session for `role` with a decodable access token.
    pub async fn sign_in(&self, role: &str) {
        self.sign_in_with(role, &token_for(role)).await;
    }

    pub fn visits(&self) -> Vec<String> {
        self.navigator.visits()
    }
}

/// Unsigned token carrying `claims`.
pub fn mint(claims: Value) -> String {
    format!(
        "{}.{}.unsigned",
        URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(claims.to_string())
    )
}

/// Token for `role` that expires in 2100.
pub fn token_for(role: &str) -> String {
    mint(json!({"userId": 7, "username": "alice", "role": role, "exp": 4_102_444_800i64}))
}

pub fn user(role: &str) -> User {
    User {
        user_id: 7,
        username: "alice".to_string(),
        role: role.to_string(),
        is_active: Some(true),
    }
}

/// Body of a successful login or registration.
pub fn login_body(role: &str) -> String {
    json!({
        "message": "Login successful",
        "data": {
            "user": {"userId": 7, "username": "alice", "role": role},
            "accessToken": token_for(role),
            "refreshToken": "refresh-new",
        }
    })
    .to_string()
}
