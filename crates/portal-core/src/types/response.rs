//! Response envelopes returned by the backend.

use serde::{Deserialize, Serialize};

/// Success envelope wrapping every payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Server-provided status text.
    #[serde(default)]
    pub message: String,
    /// Response data.
    pub data: T,
}

/// Error envelope sent with non-2xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
    /// Optional field-level details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<serde_json::Value>>,
}
