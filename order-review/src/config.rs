//! Review configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shared::error::{ReviewError, ReviewResult};

use crate::options::ORDER_DETAILS_KEY;
use crate::price::DEFAULT_SEPARATOR;

/// Environment override for [`ReviewConfig::store_path`]
pub const STORE_PATH_ENV: &str = "ORDER_REVIEW_STORE";

/// Review screen configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Key the order options are stored under
    pub storage_key: String,
    /// redb file for persisted options (None = in-memory)
    pub store_path: Option<PathBuf>,
    /// Thousands separator for totals
    pub thousands_separator: char,
    /// tracing filter directive, e.g. "order_review=debug"
    pub log_filter: Option<String>,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            storage_key: ORDER_DETAILS_KEY.to_string(),
            store_path: None,
            thousands_separator: DEFAULT_SEPARATOR,
            log_filter: None,
        }
    }
}

impl ReviewConfig {
    /// Load from a JSON file; defaults when the file does not exist
    pub fn load(path: &Path) -> ReviewResult<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content).map_err(|e| ReviewError::config(e.to_string()))
        } else {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Write as pretty JSON
    pub fn save(&self, path: &Path) -> ReviewResult<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| ReviewError::config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply `ORDER_REVIEW_STORE` if set and non-empty
    pub fn with_env_overrides(self) -> Self {
        self.with_store_override(std::env::var(STORE_PATH_ENV).ok())
    }

    fn with_store_override(mut self, value: Option<String>) -> Self {
        if let Some(path) = value.filter(|v| !v.trim().is_empty()) {
            tracing::debug!(path = %path, "Store path overridden from environment");
            self.store_path = Some(PathBuf::from(path));
        }
        self
    }
}
