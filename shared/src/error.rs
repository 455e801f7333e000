//! Error types for the shared crate
//!
//! One error enum for the order review core. Malformed snapshots, unparseable
//! numbers and bad time input are never errors; they degrade to defaults.

use thiserror::Error;

/// Unified error type for the order review core
#[derive(Debug, Error)]
pub enum ReviewError {
    /// Selected area id is not in the catalog
    #[error("Area not found: {0}")]
    AreaNotFound(String),

    /// Selected item id is not in the area
    #[error("Item not found: {item_id} (area {area_id})")]
    ItemNotFound { area_id: String, item_id: String },

    /// Key-value backend failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration could not be read or written
    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReviewError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether the error is caused by an unknown catalog id
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AreaNotFound(_) | Self::ItemNotFound { .. })
    }
}

pub type ReviewResult<T> = Result<T, ReviewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ReviewError::ItemNotFound {
            area_id: "kfc".into(),
            item_id: "combo".into(),
        };
        assert_eq!(err.to_string(), "Item not found: combo (area kfc)");
        assert!(err.is_not_found());
        assert!(!ReviewError::storage("disk full").is_not_found());
    }
}
