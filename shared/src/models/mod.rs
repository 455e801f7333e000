//! Data models
//!
//! JSON shapes match what the web client already sends and stores.
//! Ids are strings.

pub mod basket;
pub mod catalog;
pub mod order_options;

// Re-exports
pub use basket::*;
pub use catalog::*;
pub use order_options::*;
