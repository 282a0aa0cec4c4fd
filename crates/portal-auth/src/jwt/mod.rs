//! Bearer token decoding and claims.

pub mod claims;
pub mod decoder;

pub use claims::Claims;
pub use decoder::{DecodeError, JwtDecoder};
