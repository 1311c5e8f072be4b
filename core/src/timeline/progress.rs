// order_timeline/src/timeline/progress.rs

//! Elapsed-time arithmetic shared by the snapshot fields.

use crate::core::stage::DELIVERY_OFFSET_DAYS;
use chrono::{DateTime, Utc};

/// Whole days between `created` and `now`, floored.
///
/// A `now` earlier than `created` (clock skew, bad input) yields 0.
pub fn days_elapsed(created: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
  let elapsed = now.signed_duration_since(created);
  if elapsed < chrono::Duration::zero() {
    tracing::warn!(%created, %now, "Current time precedes order creation; clamping elapsed days to 0.");
    return 0;
  }
  u32::try_from(elapsed.num_days()).unwrap_or(u32::MAX)
}

/// Share of the delivery window that has elapsed, in `[0, 100]`.
pub fn progress_percent(days_elapsed: u32) -> f64 {
  let ratio = f64::from(days_elapsed) / f64::from(DELIVERY_OFFSET_DAYS);
  (ratio * 100.0).min(100.0)
}

/// Display rounding for progress: nearest integer, halves away from zero.
pub fn round_progress(progress_percent: f64) -> u8 {
  progress_percent.clamp(0.0, 100.0).round() as u8
}

/// Whole days left until the estimated delivery date, never negative.
pub fn days_until_delivery(days_elapsed: u32) -> u32 {
  DELIVERY_OFFSET_DAYS.saturating_sub(days_elapsed)
}
