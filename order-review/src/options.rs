//! Order option persistence
//!
//! Loads and writes the [`OrderOptions`] snapshot under a single key.
//! Anything unreadable is treated as "nothing stored": the caller always gets
//! usable options, never a partially recovered snapshot.

use shared::error::ReviewResult;
use shared::models::{DEFAULT_ORDER_DATA, OrderOptions};

use crate::details::OrderDetails;
use crate::store::KeyValueStore;

/// Storage key used by the web client
pub const ORDER_DETAILS_KEY: &str = "____orderDetails";

/// Persists order options in an injected key-value store
#[derive(Debug)]
pub struct OrderOptionStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> OrderOptionStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, ORDER_DETAILS_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Stored snapshot, or defaults when missing or malformed
    pub fn load(&self) -> OrderOptions {
        self.load_checked()
            .map(|(options, _)| options)
            .unwrap_or(DEFAULT_ORDER_DATA)
    }

    /// Stored snapshot in its in-memory form
    pub fn load_details(&self) -> OrderDetails {
        self.load_checked()
            .map(|(_, details)| details)
            .unwrap_or_default()
    }

    fn load_checked(&self) -> Option<(OrderOptions, OrderDetails)> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key = %self.key, "No stored order options, using defaults");
                return None;
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read order options, using defaults");
                return None;
            }
        };

        let options: OrderOptions = match serde_json::from_str(&raw) {
            Ok(options) => options,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Malformed order options discarded");
                return None;
            }
        };

        match OrderDetails::from_options(&options) {
            Ok(details) => {
                tracing::debug!(key = %self.key, ?options, "Order options loaded");
                Some((options, details))
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Malformed order options discarded");
                None
            }
        }
    }

    /// Replace the stored snapshot
    pub fn save(&mut self, options: &OrderOptions) -> ReviewResult<()> {
        let content = serde_json::to_string(options)?;
        self.store.set(&self.key, &content)?;
        tracing::debug!(key = %self.key, ?options, "Order options saved");
        Ok(())
    }

    pub fn save_details(&mut self, details: &OrderDetails) -> ReviewResult<()> {
        self.save(&details.to_options())
    }

    /// Store the defaults for the next order
    pub fn reset(&mut self) -> ReviewResult<()> {
        self.save(&DEFAULT_ORDER_DATA)
    }
}
