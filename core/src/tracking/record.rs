// order_timeline/src/tracking/record.rs

//! Order records as the order service returns them, and the caller-side
//! branch that keeps cancelled orders out of the forward projection.

use crate::core::clock::Clock;
use crate::core::stage::Stage;
use crate::core::status::OrderStatus;
use crate::core::timestamp::OrderDate;
use crate::error::TimelineResult;
use crate::timeline::{TimelineEstimator, TimelineSnapshot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The slice of an order payload the timeline needs. Other fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
  pub order_id: u64,
  pub order_date: OrderDate,
  /// Absent or `null` when the order service has not reported one yet.
  #[serde(default)]
  pub status: Option<String>,
}

impl OrderRecord {
  pub fn new(order_id: u64, order_date: impl Into<OrderDate>, status: impl Into<String>) -> Self {
    Self {
      order_id,
      order_date: order_date.into(),
      status: Some(status.into()),
    }
  }

  /// A record with no reported status; completion follows elapsed time.
  pub fn without_status(order_id: u64, order_date: impl Into<OrderDate>) -> Self {
    Self {
      order_id,
      order_date: order_date.into(),
      status: None,
    }
  }
}

/// What the presentation layer renders for one order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OrderTracking {
  Active {
    order_id: u64,
    /// `None` when no status was reported, or when it was unknown and the
    /// configured policy fell back to the elapsed-time projection.
    status: Option<OrderStatus>,
    snapshot: TimelineSnapshot,
  },
  /// Terminal. The snapshot only marks `RECEIVED` as completed: nothing else
  /// is known to have happened before the order was cancelled.
  Cancelled { order_id: u64, snapshot: TimelineSnapshot },
}

impl OrderTracking {
  pub fn order_id(&self) -> u64 {
    match self {
      OrderTracking::Active { order_id, .. } | OrderTracking::Cancelled { order_id, .. } => *order_id,
    }
  }

  pub fn snapshot(&self) -> &TimelineSnapshot {
    match self {
      OrderTracking::Active { snapshot, .. } | OrderTracking::Cancelled { snapshot, .. } => snapshot,
    }
  }

  pub fn is_cancelled(&self) -> bool {
    matches!(self, OrderTracking::Cancelled { .. })
  }
}

/// A record with its timestamp parsed and its status translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ResolvedOrder {
  pub order_id: u64,
  pub created_at: DateTime<Utc>,
  pub status: Option<OrderStatus>,
  pub authoritative: Option<Stage>,
}

impl ResolvedOrder {
  pub fn resolve<C: Clock>(estimator: &TimelineEstimator<C>, record: &OrderRecord) -> TimelineResult<Self> {
    let created_at = record.order_date.resolve()?;
    let raw_status = record.status.as_deref();

    // Cancelled is checked first so it never reaches the stage arithmetic.
    if let Some(Ok(OrderStatus::Cancelled)) = raw_status.map(str::parse::<OrderStatus>) {
      return Ok(Self {
        order_id: record.order_id,
        created_at,
        status: Some(OrderStatus::Cancelled),
        authoritative: Some(Stage::Received),
      });
    }

    let authoritative = estimator.resolve_status(raw_status)?;
    Ok(Self {
      order_id: record.order_id,
      created_at,
      status: authoritative.and(raw_status).and_then(|raw| raw.parse::<OrderStatus>().ok()),
      authoritative,
    })
  }

  pub fn into_tracking(self, snapshot: TimelineSnapshot) -> OrderTracking {
    match self.status {
      Some(OrderStatus::Cancelled) => OrderTracking::Cancelled {
        order_id: self.order_id,
        snapshot,
      },
      status => OrderTracking::Active {
        order_id: self.order_id,
        status,
        snapshot,
      },
    }
  }
}

/// Tracks a single record against the estimator's clock, without memoization.
pub fn track_record<C: Clock>(estimator: &TimelineEstimator<C>, record: &OrderRecord) -> TimelineResult<OrderTracking> {
  let resolved = ResolvedOrder::resolve(estimator, record)?;
  let snapshot = estimator.estimate(resolved.created_at, resolved.authoritative)?;
  Ok(resolved.into_tracking(snapshot))
}
