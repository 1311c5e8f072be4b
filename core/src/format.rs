// order_timeline/src/format.rs

//! Text renderings of timeline values, in the storefront's en-US style.

use crate::timeline::{TimelineEntry, TimelineSnapshot};
use chrono::{DateTime, Utc};

/// `"Jan 6, 10:00 AM"`.
pub fn format_timeline_date(date: DateTime<Utc>) -> String {
  date.format("%b %-d, %I:%M %p").to_string()
}

/// `"Jan 6"`.
pub fn format_short_date(date: DateTime<Utc>) -> String {
  date.format("%b %-d").to_string()
}

/// `"Order Shipped: Completed • Jan 4"`.
pub fn render_entry_line(entry: &TimelineEntry) -> String {
  format!(
    "{}: {} \u{2022} {}",
    entry.label,
    entry.state.label(),
    format_short_date(entry.projected_date)
  )
}

/// One-line summary for logs and plain-text views.
///
/// The next-milestone clause is left out once the effective stage has
/// already reached it, or when the projection has nothing left to wait on.
pub fn render_summary(snapshot: &TimelineSnapshot) -> String {
  let milestone = &snapshot.next_milestone;
  let next = if milestone.reached_terminal || snapshot.effective_stage() >= milestone.stage {
    String::new()
  } else {
    format!(", next: {}", milestone.description)
  };
  format!(
    "{} ({}% elapsed){}, estimated delivery {}",
    snapshot.effective_stage(),
    snapshot.rounded_progress(),
    next,
    format_timeline_date(snapshot.estimated_delivery_date)
  )
}
