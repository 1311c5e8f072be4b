// order_timeline/src/timeline/estimator.rs

//! Defines `TimelineEstimator<C>`, the entry point that turns an order's
//! creation time and optional status into a [`TimelineSnapshot`].

use super::progress::days_elapsed;
use super::snapshot::TimelineSnapshot;
use crate::config::{EstimatorConfig, UnknownStatusPolicy};
use crate::core::clock::{Clock, SystemClock};
use crate::core::stage::Stage;
use crate::core::status::OrderStatus;
use crate::core::timestamp::parse_order_timestamp;
use crate::error::{TimelineError, TimelineResult};
use chrono::{DateTime, Utc};
use tracing::{event, Level};

/// Projects delivery timelines against an injectable clock.
///
/// Stateless apart from its clock and configuration: every call reads the
/// clock at most once and recomputes from scratch.
#[derive(Debug, Clone)]
pub struct TimelineEstimator<C: Clock = SystemClock> {
  clock: C,
  config: EstimatorConfig,
}

impl TimelineEstimator<SystemClock> {
  pub fn new() -> Self {
    Self::with_clock(SystemClock)
  }
}

impl Default for TimelineEstimator<SystemClock> {
  fn default() -> Self {
    Self::new()
  }
}

impl<C: Clock> TimelineEstimator<C> {
  pub fn with_clock(clock: C) -> Self {
    Self {
      clock,
      config: EstimatorConfig::default(),
    }
  }

  pub fn with_config(mut self, config: EstimatorConfig) -> Self {
    self.config = config;
    self
  }

  pub fn config(&self) -> &EstimatorConfig {
    &self.config
  }

  pub fn now(&self) -> DateTime<Utc> {
    self.clock.now()
  }

  /// Estimates against the estimator's clock.
  pub fn estimate(&self, order_created_at: DateTime<Utc>, authoritative: Option<Stage>) -> TimelineResult<TimelineSnapshot> {
    self.estimate_at(order_created_at, authoritative, self.clock.now())
  }

  /// Estimates against an explicit `now`. Same inputs, same snapshot.
  pub fn estimate_at(
    &self,
    order_created_at: DateTime<Utc>,
    authoritative: Option<Stage>,
    now: DateTime<Utc>,
  ) -> TimelineResult<TimelineSnapshot> {
    TimelineSnapshot::project(order_created_at, authoritative, days_elapsed(order_created_at, now))
  }

  /// Boundary entry point for raw order-service values.
  ///
  /// `CANCELLED` is refused with `TimelineError::CancelledOrder`; callers
  /// branch on it before asking for a projection.
  pub fn estimate_raw(&self, order_date: &str, status: Option<&str>) -> TimelineResult<TimelineSnapshot> {
    let order_created_at = parse_order_timestamp(order_date)?;
    let authoritative = self.resolve_status(status)?;
    self.estimate(order_created_at, authoritative)
  }

  /// Translates a raw status into the stage used for completion, applying
  /// the configured [`UnknownStatusPolicy`].
  pub fn resolve_status(&self, status: Option<&str>) -> TimelineResult<Option<Stage>> {
    let Some(raw) = status else {
      return Ok(None);
    };

    match raw.parse::<OrderStatus>() {
      Ok(OrderStatus::Cancelled) => Err(TimelineError::CancelledOrder),
      Ok(parsed) => Ok(parsed.stage()),
      Err(err @ TimelineError::UnknownStatus { .. }) => match self.config.unknown_status {
        UnknownStatusPolicy::Reject => Err(err),
        UnknownStatusPolicy::FallBackToElapsed => {
          event!(Level::WARN, status = %raw, "Unknown order status; falling back to elapsed-time projection.");
          Ok(None)
        }
      },
      Err(other) => Err(other),
    }
  }
}
