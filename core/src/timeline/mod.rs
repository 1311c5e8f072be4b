// order_timeline/src/timeline/mod.rs

//! Derivation of the timeline snapshot: elapsed days, progress, next
//! milestone, estimated delivery and per-stage entries.

pub mod entries;
pub mod estimator;
pub mod milestone;
pub mod progress;
pub mod snapshot;

pub use entries::{build_entries, EntryState, IconKind, TimelineEntry};
pub use estimator::TimelineEstimator;
pub use milestone::{next_milestone, NextMilestone};
pub use progress::{days_elapsed, days_until_delivery, progress_percent, round_progress};
pub use snapshot::{estimated_delivery, TimelineSnapshot};
