//! Order Options Model
//!
//! Persisted snapshot of the review screen's user-editable options.
//! The JSON shape (`{faster, time, selfService}`) is shared with the web
//! client, so field names stay camelCase.

use serde::{Deserialize, Serialize};

/// Order options snapshot
///
/// `faster` and a non-empty `time` are not kept exclusive here; the
/// interaction layer is responsible for that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderOptions {
    /// As soon as possible
    pub faster: bool,
    /// Canonical `HH:MM`, or empty. Only meaningful when `faster` is false
    pub time: String,
    /// true = takeaway, false = dine-in
    pub self_service: bool,
}

/// Options used when nothing has been stored yet, and after checkout
pub const DEFAULT_ORDER_DATA: OrderOptions = OrderOptions {
    faster: true,
    time: String::new(),
    self_service: false,
};

impl Default for OrderOptions {
    fn default() -> Self {
        DEFAULT_ORDER_DATA
    }
}
