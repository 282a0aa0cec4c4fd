//! Claims carried in the access token payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};

use portal_core::types::Role;

/// Decoded access token payload.
///
/// `role` and `exp` are required; a payload without them does not decode.
/// The remaining fields depend on what the backend chose to sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, either a string or a numeric id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<serde_json::Value>,
    /// Numeric user id, when the backend signs it directly.
    #[serde(default, rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    /// Username for convenience.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Raw role string.
    pub role: String,
    /// Issued-at timestamp (seconds since epoch).
    #[serde(
        default,
        deserialize_with = "optional_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub iat: Option<i64>,
    /// Expiration timestamp (seconds since epoch).
    #[serde(deserialize_with = "timestamp")]
    pub exp: i64,
}

impl Claims {
    /// Typed role, or `None` when the token names a role this client does not know.
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    /// Subject as text, falling back to `userId`.
    pub fn subject(&self) -> Option<String> {
        match &self.sub {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(serde_json::Value::Number(n)) => Some(n.to_string()),
            _ => self.user_id.map(|id| id.to_string()),
        }
    }

    /// Returns the expiration as a `DateTime<Utc>`, `None` when `exp` is
    /// outside the representable range.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Checks whether this token has expired.
    ///
    /// Informational only: the session oracle deliberately does not consult it.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Returns the remaining TTL in seconds (0 if expired).
    pub fn remaining_ttl_seconds(&self) -> u64 {
        let remaining = self.exp.saturating_sub(Utc::now().timestamp());
        u64::try_from(remaining).unwrap_or(0)
    }
}

/// NumericDate: integral or fractional seconds. Fractions are truncated.
fn timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let number = serde_json::Number::deserialize(deserializer)?;
    seconds(&number).ok_or_else(|| de::Error::custom(format!("invalid NumericDate: {number}")))
}

fn optional_timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    match Option::<serde_json::Number>::deserialize(deserializer)? {
        Some(number) => seconds(&number)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid NumericDate: {number}"))),
        None => Ok(None),
    }
}

fn seconds(number: &serde_json::Number) -> Option<i64> {
    match (number.as_i64(), number.as_f64()) {
        (Some(secs), _) => Some(secs),
        (None, Some(secs)) if secs.is_finite() => Some(secs as i64),
        _ => None,
    }
}
