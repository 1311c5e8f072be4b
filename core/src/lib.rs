// order_timeline/src/lib.rs

//! order_timeline: projects a delivery timeline for storefront orders.
//!
//! Given when an order was placed and, optionally, the status the order
//! service reports for it, the estimator derives:
//!  - the stage the order has probably reached by now (elapsed-time projection),
//!  - a 0-100% progress value and the next milestone with a day countdown,
//!  - the estimated delivery date,
//!  - one timeline entry per stage, each anchored to the order's creation time.
//!
//! The authoritative status, when supplied, decides which entries are
//! completed; elapsed time only fills in when it is absent. Cancelled orders
//! are branched off by the tracking layer before any projection happens.

pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod timeline;
pub mod tracking;

// --- Re-exports for the Public API ---

pub use crate::config::{EstimatorConfig, UnknownStatusPolicy};
pub use crate::core::{
  parse_order_timestamp, Clock, FixedClock, OrderDate, OrderStatus, Stage, StageDescriptor, SystemClock,
  DELIVERY_OFFSET_DAYS,
};
pub use crate::error::{TimelineError, TimelineResult};
pub use crate::format::{format_short_date, format_timeline_date, render_entry_line, render_summary};
pub use crate::timeline::{
  EntryState, IconKind, NextMilestone, TimelineEntry, TimelineEstimator, TimelineSnapshot,
};
pub use crate::tracking::{
  track_record, InMemoryOrderSource, OrderRecord, OrderSource, OrderTracker, OrderTracking, SnapshotCache,
};

/*
    Typical use from a page-rendering layer:
    1. Build a `TimelineEstimator` (system clock by default, `FixedClock` in tests).
    2. Wrap the order-retrieval client in an `OrderSource` and hand both to `OrderTracker::new`.
    3. `tracker.track(order_id).await` returns `OrderTracking::Active` or `OrderTracking::Cancelled`.
    4. Render `tracking.snapshot().entries`; `is_cancelled()` switches the view to its terminal state.
*/
