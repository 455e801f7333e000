//! Shared types for the order review core
//!
//! Catalog, basket and persisted option types exchanged with the web client,
//! plus the common error type.

pub mod error;
pub mod models;

// Re-exports
pub use error::{ReviewError, ReviewResult};
pub use serde::{Deserialize, Serialize};
