//! Authenticated API client.
//!
//! Every call goes through [`ApiClient::execute`], which attaches the stored
//! access token and, on a 401, exchanges the refresh token once and re-sends
//! the request. When the refresh fails the whole session is dropped and the
//! user is sent to a login page.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use portal_auth::{Navigation, SessionRepository};
use portal_core::config::{ApiConfig, RoutesConfig};
use portal_core::error::AppError;
use portal_core::result::AppResult;
use portal_core::types::{ApiResponse, Role};

use crate::error::{api_error, transport_error};
use crate::refresh::RefreshClient;
use crate::request::{ApiReply, ApiRequest, Attempt};

/// HTTP client with the refresh-and-retry protocol built in.
///
/// Cheap to clone; clones share the HTTP pool, the session and the refresh
/// lock.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<dyn SessionRepository>,
    refresher: RefreshClient,
    navigation: Navigation,
    routes: RoutesConfig,
    refresh_lock: Option<Arc<Mutex<()>>>,
}

impl ApiClient {
    /// Builds a client for `api.base_url` on top of the given session.
    pub fn new(
        api: &ApiConfig,
        routes: RoutesConfig,
        session: Arc<dyn SessionRepository>,
        navigation: Navigation,
    ) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(api.timeout_seconds))
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: api.base_url.trim_end_matches('/').to_string(),
            session,
            refresher: RefreshClient::new(api)?,
            navigation,
            routes,
            refresh_lock: api
                .single_flight_refresh
                .then(|| Arc::new(Mutex::new(()))),
        })
    }

    /// Sends `request`, refreshing the access token at most once on 401.
    pub async fn execute(&self, mut request: ApiRequest) -> AppResult<ApiReply> {
        let mut bearer = self.session.access_token().await;

        loop {
            match self.send(&request, bearer.as_deref()).await {
                Attempt::Success(reply) => return Ok(reply),
                Attempt::Failed(err) => return Err(err),
                Attempt::Unauthorized(err) if request.is_auth_call() || request.is_retried() => {
                    debug!(
                        path = %request.path,
                        retried = request.is_retried(),
                        "401 passed through without refresh"
                    );
                    return Err(err);
                }
                Attempt::Unauthorized(_) => {
                    info!(path = %request.path, "Access token rejected, refreshing");
                    request.mark_retried();
                    bearer = Some(self.refresh_access_token(bearer.as_deref()).await?);
                }
            }
        }
    }

    /// GET `path` and unwrap the success envelope.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<ApiResponse<T>> {
        self.execute(ApiRequest::get(path)).await?.json()
    }

    /// POST `body` to `path` and unwrap the success envelope.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> AppResult<ApiResponse<T>>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        self.execute(ApiRequest::post(path).json(body)?).await?.json()
    }

    /// PUT `body` to `path` and deserialize the reply as `T`.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        self.execute(ApiRequest::put(path).json(body)?).await?.json()
    }

    pub fn session(&self) -> &Arc<dyn SessionRepository> {
        &self.session
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn routes(&self) -> &RoutesConfig {
        &self.routes
    }

    async fn send(&self, request: &ApiRequest, bearer: Option<&str>) -> Attempt {
        debug!(
            method = %request.method,
            path = %request.path,
            authenticated = bearer.is_some(),
            retried = request.is_retried(),
            "Sending request"
        );
        Attempt::from_result(self.dispatch(request, bearer).await)
    }

    async fn dispatch(&self, request: &ApiRequest, bearer: Option<&str>) -> AppResult<ApiReply> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = self.http.request(request.method.clone(), url);
        if let Some(token) = bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(transport_error)?;

        if !status.is_success() {
            debug!(path = %request.path, status = status.as_u16(), "Request failed");
            return Err(api_error(status, &bytes));
        }

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };
        Ok(ApiReply {
            status: status.as_u16(),
            body,
        })
    }

    /// Obtains a replacement for `stale`, the token the server just rejected.
    async fn refresh_access_token(&self, stale: Option<&str>) -> AppResult<String> {
        let _guard = match &self.refresh_lock {
            Some(lock) => Some(lock.lock().await),
            None => None,
        };

        if self.refresh_lock.is_some() {
            match (self.session.access_token().await, stale) {
                (Some(current), stale) if stale != Some(current.as_str()) => {
                    debug!("Access token already replaced by a concurrent refresh");
                    return Ok(current);
                }
                (None, Some(_)) => {
                    debug!("Session ended by a concurrent refresh");
                    return Err(AppError::refresh_exhausted("Session has ended"));
                }
                _ => {}
            }
        }

        let Some(refresh_token) = self.session.refresh_token().await else {
            warn!("No refresh token stored");
            return Err(self.force_logout().await);
        };

        match self.refresher.refresh(&refresh_token).await {
            Ok(token) => {
                if let Err(e) = self.session.set_access_token(&token).await {
                    warn!(error = %e, "Failed to persist refreshed access token");
                }
                info!("Access token refreshed");
                Ok(token)
            }
            Err(e) => {
                warn!(error = %e, "Token refresh failed");
                Err(self.force_logout().await)
            }
        }
    }

    /// Drops the session and sends the user to the login page of the portal
    /// the cached user belongs to.
    async fn force_logout(&self) -> AppError {
        let destination = match self.session.cached_user().await {
            Some(user) if user.role() == Some(Role::Admin) => self.routes.admin_login.clone(),
            Some(_) => self.routes.staff_login.clone(),
            None => self.routes.home.clone(),
        };

        self.session.clear().await;
        self.navigation.force(&destination);
        AppError::refresh_exhausted("Session expired, please sign in again")
    }
}
