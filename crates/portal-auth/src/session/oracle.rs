//! Session oracle: "is anyone signed in, and as what?"

use std::sync::Arc;

use tracing::debug;

use portal_core::types::Role;

use crate::jwt::{Claims, JwtDecoder};

use super::store::SessionRepository;

/// Answers authentication questions from the stored access token.
///
/// These answers are UI-routing hints only. A token counts as valid as soon
/// as it decodes; its `exp` is not consulted, so a stale token keeps passing
/// until the backend rejects a request with 401 and the refresh flow takes
/// over.
#[derive(Debug, Clone)]
pub struct SessionOracle {
    repo: Arc<dyn SessionRepository>,
    decoder: JwtDecoder,
}

impl SessionOracle {
    /// Creates an oracle over the given session repository.
    pub fn new(repo: Arc<dyn SessionRepository>) -> Self {
        Self {
            repo,
            decoder: JwtDecoder::new(),
        }
    }

    /// Decoded claims of the stored access token.
    pub async fn claims(&self) -> Option<Claims> {
        let token = self.repo.access_token().await?;
        match self.decoder.decode(&token) {
            Ok(claims) => Some(claims),
            Err(e) => {
                debug!(error = %e, "Stored access token does not decode");
                None
            }
        }
    }

    /// True iff an access token is stored and it decodes.
    pub async fn is_authenticated(&self) -> bool {
        self.claims().await.is_some()
    }

    /// Role named by the stored access token.
    pub async fn role(&self) -> Option<Role> {
        self.claims().await.and_then(|claims| claims.role())
    }

    /// Removes the whole persisted session.
    pub async fn clear(&self) {
        self.repo.clear().await;
    }

    /// The repository this oracle reads from.
    pub fn repository(&self) -> &Arc<dyn SessionRepository> {
        &self.repo
    }
}
