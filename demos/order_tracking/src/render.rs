// demos/order_tracking/src/render.rs

//! Plain-text and JSON renderings of a tracking view, standing in for the
//! storefront's order detail page.

use crate::errors::Result;
use order_timeline::{format_timeline_date, render_entry_line, render_summary, OrderTracking};

pub fn render_text(tracking: &OrderTracking) -> String {
  let snapshot = tracking.snapshot();
  let mut out = String::new();

  let headline = if tracking.is_cancelled() {
    format!("Order #{} - CANCELLED (placed {})", tracking.order_id(), format_timeline_date(snapshot.order_created_at))
  } else {
    format!("Order #{} - {}", tracking.order_id(), render_summary(snapshot))
  };
  out.push_str(&headline);
  out.push('\n');

  for entry in &snapshot.entries {
    out.push_str("  ");
    out.push_str(&render_entry_line(entry));
    out.push('\n');
  }
  if !tracking.is_cancelled() && snapshot.is_behind_schedule() {
    out.push_str("  (behind the usual schedule)\n");
  }
  out
}

pub fn render_json(tracking: &OrderTracking) -> Result<String> {
  Ok(serde_json::to_string_pretty(tracking)?)
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::{TimeZone, Utc};
  use order_timeline::{track_record, FixedClock, OrderRecord, TimelineEstimator};

  fn estimator() -> TimelineEstimator<FixedClock> {
    TimelineEstimator::with_clock(FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 4, 0, 0, 0).unwrap()))
  }

  #[test]
  fn text_view_lists_every_stage() {
    let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let tracking = track_record(&estimator(), &OrderRecord::new(7, created, "CONFIRMED")).unwrap();
    let text = render_text(&tracking);
    assert!(text.starts_with("Order #7 - CONFIRMED (60% elapsed)"));
    assert_eq!(text.lines().filter(|l| l.starts_with("  Order ")).count(), 4);
    assert!(text.contains("behind the usual schedule"));
  }

  #[test]
  fn cancelled_view_is_marked() {
    let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let tracking = track_record(&estimator(), &OrderRecord::new(8, created, "CANCELLED")).unwrap();
    let text = render_text(&tracking);
    assert!(text.starts_with("Order #8 - CANCELLED"));
    assert!(render_json(&tracking).unwrap().contains("\"kind\": \"cancelled\""));
  }
}
