//! Response DTOs not shared outside the client.

use serde::{Deserialize, Serialize};

/// Payload of a successful refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    /// Replacement access token.
    pub access_token: String,
}

/// Envelope whose payload is ignored; only the server message is kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}
