//! Order review core
//!
//! Logic behind the order review screen of the food-ordering client:
//!
//! - [`basket`]: which basket lines belong to the selected item, and their total
//! - [`details`]: ASAP / target time / takeaway options and their interaction rules
//! - [`options`]: persisting those options across navigation
//! - [`screen`]: the controller that ties them to the two ways off the screen

pub mod basket;
pub mod config;
pub mod details;
pub mod logging;
pub mod options;
pub mod price;
pub mod screen;
pub mod store;
pub mod time;

// Re-exports
pub use basket::{BasketReview, ReviewLine, compute_review};
pub use config::ReviewConfig;
pub use details::{OrderDetails, ServiceMode, TimingChoice};
pub use options::{ORDER_DETAILS_KEY, OrderOptionStore};
pub use screen::{Navigation, ReviewScreen};
pub use store::{KeyValueStore, MemoryStore, RedbStore, StoreError};
pub use time::{ClockTime, FALLBACK_TIME, normalize_time, validate_time};

pub use shared;
