//! Core traits defined in `portal-core` and implemented by other crates.

pub mod navigator;
pub mod store;

pub use navigator::Navigator;
pub use store::KeyValueStore;
