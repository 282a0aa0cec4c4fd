//! Token store: the persisted half of the session.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use portal_core::error::AppError;
use portal_core::result::AppResult;
use portal_core::traits::KeyValueStore;
use portal_core::types::User;
use portal_store::keys;

/// Everything persisted for a signed-in user.
///
/// `user` is the record the backend returned at login. It is advisory only
/// and may lag behind the tokens; roles for routing always come from the
/// access token's claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Bearer token sent with API requests.
    pub access_token: String,
    /// Token exchanged for a new access token.
    pub refresh_token: Option<String>,
    /// Cached user record.
    pub user: Option<User>,
}

impl Session {
    /// Creates a session from a fresh login.
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>, user: User) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: Some(refresh_token.into()),
            user: Some(user),
        }
    }
}

/// Load/save/clear access to the persisted session.
///
/// Reads never fail: an unavailable store reads as "no session". Passed to
/// the HTTP client and the route guard as `Arc<dyn SessionRepository>`.
#[async_trait]
pub trait SessionRepository: Send + Sync + std::fmt::Debug + 'static {
    /// The whole session, or `None` when no access token is stored.
    async fn load(&self) -> Option<Session>;

    /// Persists all three entries. On a failed write nothing is kept.
    async fn save(&self, session: &Session) -> AppResult<()>;

    /// Removes every session entry. Safe to call repeatedly.
    async fn clear(&self);

    /// The stored access token.
    async fn access_token(&self) -> Option<String>;

    /// The stored refresh token.
    async fn refresh_token(&self) -> Option<String>;

    /// The cached user record, `None` when absent or unparseable.
    async fn cached_user(&self) -> Option<User>;

    /// Replaces only the access token, as the refresh flow does.
    async fn set_access_token(&self, token: &str) -> AppResult<()>;
}

/// [`SessionRepository`] over a [`KeyValueStore`], one key per entry.
#[derive(Debug, Clone)]
pub struct TokenStore {
    store: Arc<dyn KeyValueStore>,
}

impl TokenStore {
    /// Creates a token store on top of the given backend.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    async fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key).await {
            Ok(value) => value,
            Err(e) => {
                warn!(key, backend = self.store.backend_name(), error = %e, "Session store unavailable");
                None
            }
        }
    }

    async fn write_all(&self, session: &Session) -> AppResult<()> {
        self.store.set(keys::ACCESS_TOKEN, &session.access_token).await?;

        match &session.refresh_token {
            Some(token) => self.store.set(keys::REFRESH_TOKEN, token).await?,
            None => self.store.remove(keys::REFRESH_TOKEN).await?,
        }

        match &session.user {
            Some(user) => {
                let json = serde_json::to_string(user)?;
                self.store.set(keys::USER, &json).await?
            }
            None => self.store.remove(keys::USER).await?,
        }

        Ok(())
    }
}

#[async_trait]
impl SessionRepository for TokenStore {
    async fn load(&self) -> Option<Session> {
        let access_token = self.read(keys::ACCESS_TOKEN).await?;
        Some(Session {
            access_token,
            refresh_token: self.read(keys::REFRESH_TOKEN).await,
            user: self.cached_user().await,
        })
    }

    async fn save(&self, session: &Session) -> AppResult<()> {
        if let Err(e) = self.write_all(session).await {
            self.clear().await;
            return Err(AppError::storage(format!("Failed to persist session: {e}")));
        }
        debug!(backend = self.store.backend_name(), "Session saved");
        Ok(())
    }

    async fn clear(&self) {
        for key in keys::SESSION_KEYS {
            if let Err(e) = self.store.remove(key).await {
                warn!(key, error = %e, "Failed to remove session entry");
            }
        }
        debug!(backend = self.store.backend_name(), "Session cleared");
    }

    async fn access_token(&self) -> Option<String> {
        self.read(keys::ACCESS_TOKEN).await
    }

    async fn refresh_token(&self) -> Option<String> {
        self.read(keys::REFRESH_TOKEN).await
    }

    async fn cached_user(&self) -> Option<User> {
        let raw = self.read(keys::USER).await?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!(error = %e, "Cached user record is not valid JSON");
                None
            }
        }
    }

    async fn set_access_token(&self, token: &str) -> AppResult<()> {
        self.store.set(keys::ACCESS_TOKEN, token).await
    }
}
