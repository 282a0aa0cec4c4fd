//! Unified application error types for the portal.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator.

use std::fmt;
use thiserror::Error;

/// Message shown when no response reached the server.
pub const NETWORK_MESSAGE: &str = "No response from server (possible CORS issue or server down)";

/// Top-level error kind categorization used across the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// A bearer token could not be decoded.
    Decode,
    /// The request never reached the server (connect failure, timeout).
    Network,
    /// The server answered with an error envelope.
    Api,
    /// The authenticated account belongs to another portal.
    RoleMismatch,
    /// The refresh token could not be exchanged; the session is gone.
    RefreshExhausted,
    /// Input validation failed.
    Validation,
    /// The session store backend failed.
    Storage,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An internal error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode => write!(f, "DECODE"),
            Self::Network => write!(f, "NETWORK"),
            Self::Api => write!(f, "API"),
            Self::RoleMismatch => write!(f, "ROLE_MISMATCH"),
            Self::RefreshExhausted => write!(f, "REFRESH_EXHAUSTED"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Storage => write!(f, "STORAGE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout the portal.
///
/// `status` is only set for [`ErrorKind::Api`] errors and carries the HTTP
/// status code the server answered with.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// HTTP status returned by the server, if any.
    pub status: Option<u16>,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            source: Some(Box::new(source)),
        }
    }

    /// Create a token decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Decode, message)
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Network, message)
    }

    /// Create an API error carrying the server's status code.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            ..Self::new(ErrorKind::Api, message)
        }
    }

    /// Create a role-mismatch error.
    pub fn role_mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RoleMismatch, message)
    }

    /// Create a refresh-exhausted error.
    pub fn refresh_exhausted(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RefreshExhausted, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Storage, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Whether the server rejected the request as unauthenticated.
    pub fn is_unauthorized(&self) -> bool {
        self.kind == ErrorKind::Api && self.status == Some(401)
    }

    /// Text suitable for showing to the user.
    ///
    /// Uses the carried message when there is one, otherwise `fallback`.
    /// Network errors always get the generic connectivity text.
    pub fn user_message(&self, fallback: &str) -> String {
        match self.kind {
            ErrorKind::Network => NETWORK_MESSAGE.to_string(),
            _ if self.message.trim().is_empty() => fallback.to_string(),
            _ => self.message.clone(),
        }
    }

    /// Replaces the message with [`AppError::user_message`], keeping kind,
    /// status and cause.
    pub fn into_user_facing(mut self, fallback: &str) -> Self {
        self.message = self.user_message(fallback);
        self
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            status: self.status,
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Storage, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
