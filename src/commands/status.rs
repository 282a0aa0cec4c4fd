//! `status` command.

use serde::Serialize;

use portal_client::Portal;
use portal_core::error::AppError;

use crate::output::{self, OutputFormat};

#[derive(Debug, Serialize)]
struct SessionStatus {
    authenticated: bool,
    role: Option<String>,
    username: Option<String>,
    expires_at: Option<String>,
    expired: Option<bool>,
    has_refresh_token: bool,
}

/// Execute status
pub async fn execute(portal: &Portal, format: OutputFormat) -> Result<(), AppError> {
    let claims = portal.oracle().claims().await;
    let cached = portal.client().session().cached_user().await;

    let status = SessionStatus {
        authenticated: claims.is_some(),
        role: claims.as_ref().map(|c| c.role.clone()),
        username: claims
            .as_ref()
            .and_then(|c| c.username.clone())
            .or_else(|| cached.map(|u| u.username)),
        expires_at: claims
            .as_ref()
            .and_then(|c| c.expires_at())
            .map(|t| t.to_rfc3339()),
        expired: claims.as_ref().map(|c| c.is_expired()),
        has_refresh_token: portal.client().session().refresh_token().await.is_some(),
    };

    match format {
        OutputFormat::Json => output::print_json(&status),
        OutputFormat::Table => {
            if !status.authenticated {
                output::print_warning("Not signed in");
                return Ok(());
            }
            let none = || "-".to_string();
            output::print_kv("Username", &status.username.clone().unwrap_or_else(none));
            output::print_kv("Role", &status.role.clone().unwrap_or_else(none));
            output::print_kv("Expires", &status.expires_at.clone().unwrap_or_else(none));
            if status.expired == Some(true) {
                output::print_warning("Access token has expired; it is renewed on the next request");
            }
            output::print_kv(
                "Refresh token",
                if status.has_refresh_token { "stored" } else { "missing" },
            );
        }
    }
    Ok(())
}
