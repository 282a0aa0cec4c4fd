//! Unverified bearer token decoding.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::Value;
use thiserror::Error;

use portal_core::error::{AppError, ErrorKind};

use super::claims::Claims;

/// Why a token could not be decoded.
///
/// Callers treat every variant the same way: as "not authenticated".
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The token does not have exactly three dot-separated segments.
    #[error("token must have three dot-separated segments")]
    Malformed,
    /// The header segment is not a base64url JSON object.
    #[error("invalid token header")]
    Header,
    /// The payload segment is not base64url.
    #[error("payload is not base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    /// The payload is not a claims object with `role` and `exp`.
    #[error("payload is not a claims object: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<DecodeError> for AppError {
    fn from(err: DecodeError) -> Self {
        AppError::with_source(ErrorKind::Decode, format!("Token decode failed: {err}"), err)
    }
}

/// Reads claims out of a bearer token without checking its signature.
///
/// Signature and expiry are the backend's business. The result only steers
/// which portal the UI shows.
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtDecoder;

impl JwtDecoder {
    /// Creates a new decoder.
    pub fn new() -> Self {
        Self
    }

    /// Decodes the payload segment of `token`.
    ///
    /// The header only has to be a JSON object; its `alg` is never looked
    /// at. Expired tokens decode successfully.
    pub fn decode(&self, token: &str) -> Result<Claims, DecodeError> {
        let segments: Vec<&str> = token.trim().split('.').collect();
        let [header, payload, _] = segments.as_slice() else {
            return Err(DecodeError::Malformed);
        };

        let header = segment_bytes(header).map_err(|_| DecodeError::Header)?;
        if !matches!(serde_json::from_slice::<Value>(&header), Ok(Value::Object(_))) {
            return Err(DecodeError::Header);
        }

        let claims = serde_json::from_slice(&segment_bytes(payload)?)?;
        Ok(claims)
    }
}

fn segment_bytes(segment: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD.decode(segment.trim_end_matches('='))
}
