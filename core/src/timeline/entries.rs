// order_timeline/src/timeline/entries.rs

//! Per-stage rows of the timeline, anchored to the order's creation time.

use crate::core::stage::Stage;
use crate::error::{TimelineError, TimelineResult};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Icon the presentation layer shows next to an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
  Clock,
  CheckCircle,
  Truck,
  Package,
}

impl IconKind {
  pub fn for_stage(stage: Stage) -> Self {
    match stage {
      Stage::Received => IconKind::Clock,
      Stage::Confirmed => IconKind::CheckCircle,
      Stage::Shipped => IconKind::Truck,
      Stage::Delivered => IconKind::Package,
    }
  }
}

/// Display state of an entry relative to the order's effective stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryState {
  Completed,
  /// The first stage not yet completed.
  InProgress,
  Upcoming,
}

impl EntryState {
  pub fn label(self) -> &'static str {
    match self {
      EntryState::Completed => "Completed",
      EntryState::InProgress => "In Progress",
      EntryState::Upcoming => "Upcoming",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
  pub stage: Stage,
  pub label: &'static str,
  pub description: &'static str,
  pub completed: bool,
  pub projected_date: DateTime<Utc>,
  pub icon: IconKind,
  pub state: EntryState,
}

/// `created + days`, or `InvalidInput` when the result leaves chrono's range.
pub fn offset_date(created: DateTime<Utc>, days: u32) -> TimelineResult<DateTime<Utc>> {
  created
    .checked_add_signed(Duration::days(i64::from(days)))
    .ok_or_else(|| {
      TimelineError::invalid_input(created.to_rfc3339(), format!("adding {} days overflows the calendar", days))
    })
}

/// Builds one entry per stage, in stage order.
///
/// An entry is completed when its stage does not come after `effective`.
/// `Received` is never after anything, so it is always completed; and because
/// completion is a rank comparison, it is monotonic in stage order.
/// Projected dates depend only on `created`, never on the current time.
pub fn build_entries(created: DateTime<Utc>, effective: Stage) -> TimelineResult<Vec<TimelineEntry>> {
  let first_pending = effective.next();

  Stage::ALL
    .iter()
    .map(|&stage| {
      let descriptor = stage.descriptor();
      let completed = stage <= effective;
      let state = if completed {
        EntryState::Completed
      } else if Some(stage) == first_pending {
        EntryState::InProgress
      } else {
        EntryState::Upcoming
      };
      Ok(TimelineEntry {
        stage,
        label: descriptor.label,
        description: descriptor.description,
        completed,
        projected_date: offset_date(created, descriptor.offset_days)?,
        icon: IconKind::for_stage(stage),
        state,
      })
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  fn created() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap()
  }

  #[test]
  fn dates_follow_fixed_offsets() {
    let entries = build_entries(created(), Stage::Received).unwrap();
    let offsets: Vec<i64> = entries
      .iter()
      .map(|e| (e.projected_date - created()).num_days())
      .collect();
    assert_eq!(offsets, vec![0, 1, 3, 5]);
  }

  #[test]
  fn completion_is_rank_based() {
    let entries = build_entries(created(), Stage::Shipped).unwrap();
    let completed: Vec<bool> = entries.iter().map(|e| e.completed).collect();
    assert_eq!(completed, vec![true, true, true, false]);
    let states: Vec<EntryState> = entries.iter().map(|e| e.state).collect();
    assert_eq!(
      states,
      vec![EntryState::Completed, EntryState::Completed, EntryState::Completed, EntryState::InProgress]
    );
  }

  #[test]
  fn only_next_stage_is_in_progress() {
    let entries = build_entries(created(), Stage::Received).unwrap();
    assert!(entries[0].completed);
    assert_eq!(entries[1].state, EntryState::InProgress);
    assert_eq!(entries[2].state, EntryState::Upcoming);
    assert_eq!(entries[3].state, EntryState::Upcoming);
  }

  #[test]
  fn icons_match_stages() {
    let icons: Vec<IconKind> = build_entries(created(), Stage::Delivered)
      .unwrap()
      .iter()
      .map(|e| e.icon)
      .collect();
    assert_eq!(
      icons,
      vec![IconKind::Clock, IconKind::CheckCircle, IconKind::Truck, IconKind::Package]
    );
    assert_eq!(serde_json::to_string(&IconKind::CheckCircle).unwrap(), "\"check-circle\"");
  }

  #[test]
  fn overflowing_dates_are_invalid_input() {
    let edge = DateTime::<Utc>::MAX_UTC - Duration::days(2);
    assert!(matches!(
      build_entries(edge, Stage::Received),
      Err(TimelineError::InvalidInput { .. })
    ));
  }
}
