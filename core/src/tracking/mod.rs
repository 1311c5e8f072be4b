// order_timeline/src/tracking/mod.rs

//! The caller side of the estimator: order records from the order service,
//! the cancelled-order branch, and memoized tracking.

pub mod cache;
pub mod record;
pub mod source;
pub mod tracker;

pub use cache::{CacheStats, SnapshotCache, SnapshotKey};
pub use record::{track_record, OrderRecord, OrderTracking};
pub use source::{InMemoryOrderSource, OrderSource};
pub use tracker::OrderTracker;
