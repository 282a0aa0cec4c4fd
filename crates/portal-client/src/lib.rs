//! # portal-client
//!
//! The single point through which the portal talks to the backend.
//!
//! - `client`: [`ApiClient`], which attaches the bearer token and runs the
//!   refresh-and-retry protocol on 401
//! - `refresh`: the independent, non-intercepted refresh call
//! - `services`: typed wrappers for the auth, profile and warehouse endpoints
//! - `flows`: login, registration and logout as the portal pages run them
//! - `context`: [`Portal`], everything above wired from configuration

pub mod client;
pub mod context;
pub mod dto;
pub mod endpoints;
pub mod error;
pub mod flows;
pub mod refresh;
pub mod request;
pub mod services;

pub use client::ApiClient;
pub use context::Portal;
pub use request::{ApiReply, ApiRequest};
