// order_timeline/src/timeline/snapshot.rs

use super::entries::{build_entries, offset_date, TimelineEntry};
use super::milestone::{next_milestone, NextMilestone};
use super::progress::{days_until_delivery, progress_percent, round_progress};
use crate::core::stage::{Stage, DELIVERY_OFFSET_DAYS};
use crate::error::TimelineResult;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything a presentation layer needs to draw one order's timeline.
///
/// A pure projection of `(order_created_at, authoritative_stage, days_elapsed)`;
/// it holds no reference to the clock it was computed against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineSnapshot {
  pub order_created_at: DateTime<Utc>,
  /// Stage inferred from elapsed time alone.
  pub current_stage: Stage,
  /// Stage reported by the order service, when one was supplied.
  pub authoritative_stage: Option<Stage>,
  pub days_elapsed: u32,
  /// Unrounded, in `[0, 100]`. See [`TimelineSnapshot::rounded_progress`].
  pub progress_percent: f64,
  pub next_milestone: NextMilestone,
  pub estimated_delivery_date: DateTime<Utc>,
  pub days_until_delivery: u32,
  pub entries: Vec<TimelineEntry>,
}

impl TimelineSnapshot {
  pub fn project(
    order_created_at: DateTime<Utc>,
    authoritative_stage: Option<Stage>,
    days_elapsed: u32,
  ) -> TimelineResult<Self> {
    let current_stage = Stage::from_elapsed_days(days_elapsed);
    let effective = authoritative_stage.unwrap_or(current_stage);

    let snapshot = Self {
      order_created_at,
      current_stage,
      authoritative_stage,
      days_elapsed,
      progress_percent: progress_percent(days_elapsed),
      next_milestone: next_milestone(days_elapsed),
      estimated_delivery_date: estimated_delivery(order_created_at)?,
      days_until_delivery: days_until_delivery(days_elapsed),
      entries: build_entries(order_created_at, effective)?,
    };
    tracing::trace!(
      %order_created_at,
      days_elapsed,
      current_stage = %current_stage,
      effective_stage = %effective,
      "Projected timeline snapshot."
    );
    Ok(snapshot)
  }

  /// The stage that drives `completed` flags: the authoritative one when
  /// present, the elapsed-time projection otherwise.
  pub fn effective_stage(&self) -> Stage {
    self.authoritative_stage.unwrap_or(self.current_stage)
  }

  /// Progress for display, rounded to the nearest whole percent.
  pub fn rounded_progress(&self) -> u8 {
    round_progress(self.progress_percent)
  }

  /// True when the projection and the order service disagree, e.g. an order
  /// stuck at `CONFIRMED` long after it should have shipped.
  pub fn is_behind_schedule(&self) -> bool {
    self
      .authoritative_stage
      .is_some_and(|authoritative| authoritative < self.current_stage)
  }
}

/// `created + 5 days`, independent of any status.
pub fn estimated_delivery(created: DateTime<Utc>) -> TimelineResult<DateTime<Utc>> {
  offset_date(created, DELIVERY_OFFSET_DAYS)
}
