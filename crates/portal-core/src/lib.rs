//! # portal-core
//!
//! Core crate for the Gudang warehouse portal. Contains the configuration
//! schema, the wire types shared with the backend (roles, users, response
//! envelopes), the seam traits implemented by other crates, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other portal crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
