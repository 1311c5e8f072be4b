// order_timeline/src/tracking/tracker.rs

//! Defines `OrderTracker<S, C>`: fetches orders from an [`OrderSource`] and
//! turns them into [`OrderTracking`] views, memoizing snapshots when enabled.

use super::cache::{SnapshotCache, SnapshotKey};
use super::record::{OrderRecord, OrderTracking, ResolvedOrder};
use super::source::OrderSource;
use crate::core::clock::{Clock, SystemClock};
use crate::error::{TimelineError, TimelineResult};
use crate::timeline::{days_elapsed, TimelineEstimator, TimelineSnapshot};
use tracing::{event, instrument, Level};

pub struct OrderTracker<S, C = SystemClock>
where
  S: OrderSource,
  C: Clock,
{
  source: S,
  estimator: TimelineEstimator<C>,
  cache: Option<SnapshotCache>,
}

impl<S, C> OrderTracker<S, C>
where
  S: OrderSource,
  C: Clock,
{
  /// Memoization is enabled when the estimator's `cache_capacity` is non-zero.
  pub fn new(source: S, estimator: TimelineEstimator<C>) -> Self {
    let capacity = estimator.config().cache_capacity;
    let cache = (capacity > 0).then(|| SnapshotCache::new(capacity));
    event!(Level::DEBUG, cache_capacity = capacity, "Creating order tracker.");
    Self {
      source,
      estimator,
      cache,
    }
  }

  pub fn source(&self) -> &S {
    &self.source
  }

  pub fn estimator(&self) -> &TimelineEstimator<C> {
    &self.estimator
  }

  pub fn cache(&self) -> Option<&SnapshotCache> {
    self.cache.as_ref()
  }

  #[instrument(name = "OrderTracker::track", skip(self), err(Display))]
  pub async fn track(&self, order_id: u64) -> TimelineResult<OrderTracking> {
    let record = self
      .source
      .fetch_order(order_id)
      .await?
      .ok_or(TimelineError::OrderNotFound { order_id })?;
    self.track_record(&record)
  }

  /// Tracks every order the source lists. A malformed order does not hide the
  /// others: each gets its own result. Only a failing source fails the call.
  #[instrument(name = "OrderTracker::track_all", skip(self), err(Display))]
  pub async fn track_all(&self) -> TimelineResult<Vec<(u64, TimelineResult<OrderTracking>)>> {
    let records = self.source.list_orders().await?;
    event!(Level::DEBUG, count = records.len(), "Tracking listed orders.");
    Ok(
      records
        .iter()
        .map(|record| (record.order_id, self.track_record(record)))
        .collect(),
    )
  }

  /// Tracks a record already in hand, reading the clock once.
  pub fn track_record(&self, record: &OrderRecord) -> TimelineResult<OrderTracking> {
    let resolved = ResolvedOrder::resolve(&self.estimator, record)?;
    let elapsed = days_elapsed(resolved.created_at, self.estimator.now());
    let project = || TimelineSnapshot::project(resolved.created_at, resolved.authoritative, elapsed);

    let snapshot = match &self.cache {
      Some(cache) => {
        let key = SnapshotKey {
          order_id: resolved.order_id,
          order_created_at: resolved.created_at,
          authoritative_stage: resolved.authoritative,
          days_elapsed: elapsed,
        };
        cache.get_or_try_insert_with(key, project)?
      }
      None => project()?,
    };
    Ok(resolved.into_tracking(snapshot))
  }
}
