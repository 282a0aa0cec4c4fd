//! Outbound request and reply values.

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use portal_core::error::AppError;
use portal_core::result::AppResult;

use crate::endpoints;

/// One logical API call.
///
/// The same value is re-sent after a refresh, so it owns everything needed
/// to build the HTTP request again.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    retried: bool,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            retried: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Attaches a JSON body.
    pub fn json<B: Serialize>(mut self, body: &B) -> AppResult<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Login and registration calls never trigger a refresh.
    pub fn is_auth_call(&self) -> bool {
        endpoints::is_auth_call(&self.path)
    }

    /// Marks that this request was already re-sent after a refresh.
    pub fn mark_retried(&mut self) {
        self.retried = true;
    }

    pub fn is_retried(&self) -> bool {
        self.retried
    }
}

/// A 2xx answer.
#[derive(Debug, Clone)]
pub struct ApiReply {
    pub status: u16,
    pub body: Value,
}

impl ApiReply {
    /// Deserializes the body into `T`.
    pub fn json<T: DeserializeOwned>(self) -> AppResult<T> {
        serde_json::from_value(self.body).map_err(AppError::from)
    }
}

/// Result of sending a request once.
#[derive(Debug)]
pub enum Attempt {
    /// 2xx.
    Success(ApiReply),
    /// 401 from the server.
    Unauthorized(AppError),
    /// Anything else: other statuses and transport failures.
    Failed(AppError),
}

impl Attempt {
    pub(crate) fn from_result(result: AppResult<ApiReply>) -> Self {
        match result {
            Ok(reply) => Self::Success(reply),
            Err(e) if e.is_unauthorized() => Self::Unauthorized(e),
            Err(e) => Self::Failed(e),
        }
    }
}
