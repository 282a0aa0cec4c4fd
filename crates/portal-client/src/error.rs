//! Mapping of transport and HTTP failures into [`AppError`].

use reqwest::StatusCode;

use portal_core::error::{AppError, ErrorKind};
use portal_core::types::ApiErrorBody;

/// Failure before any response arrived.
pub fn transport_error(err: reqwest::Error) -> AppError {
    if err.is_builder() {
        return AppError::with_source(ErrorKind::Internal, format!("Invalid request: {err}"), err);
    }
    AppError::with_source(ErrorKind::Network, err.to_string(), err)
}

/// A non-2xx response. The server message is taken from the error envelope
/// and left empty when the body carries none.
pub fn api_error(status: StatusCode, body: &[u8]) -> AppError {
    let message = serde_json::from_slice::<ApiErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_default();
    AppError::api(status.as_u16(), message)
}
