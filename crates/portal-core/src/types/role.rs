//! Portal role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles that own a portal.
///
/// The backend names warehouse staff `staff_gudang`; plain `staff` is
/// accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Management console user.
    #[serde(rename = "admin")]
    Admin,
    /// Warehouse operations user.
    #[serde(rename = "staff_gudang", alias = "staff")]
    Staff,
}

impl Role {
    /// Return the role as sent over the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Staff => "staff_gudang",
        }
    }

    /// Human-readable label used in user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Staff => "Staff",
        }
    }

    /// Parse a wire role, returning `None` for anything unrecognized.
    pub fn parse(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = crate::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "staff_gudang" | "staff" => Ok(Self::Staff),
            _ => Err(crate::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: admin, staff_gudang"
            ))),
        }
    }
}
