// order_timeline/src/core/status.rs

//! Translation between the order service's status strings and [`Stage`].

use super::stage::Stage;
use crate::error::{TimelineError, TimelineResult};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Status vocabulary reported by the order service.
///
/// Both `PENDING` and `RECEIVED` name the first stage; callers disagree on
/// which one they send, so both are accepted on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
  Received,
  Confirmed,
  Processing,
  Shipped,
  Delivered,
  Cancelled,
}

impl OrderStatus {
  /// The forward stage this status corresponds to.
  ///
  /// `Cancelled` has no stage: it is absorbing and is never projected.
  pub fn stage(self) -> Option<Stage> {
    match self {
      OrderStatus::Received => Some(Stage::Received),
      // Paid and being prepared; nothing has left the warehouse yet.
      OrderStatus::Confirmed | OrderStatus::Processing => Some(Stage::Confirmed),
      OrderStatus::Shipped => Some(Stage::Shipped),
      OrderStatus::Delivered => Some(Stage::Delivered),
      OrderStatus::Cancelled => None,
    }
  }

  pub fn is_cancelled(self) -> bool {
    matches!(self, OrderStatus::Cancelled)
  }
}

impl FromStr for OrderStatus {
  type Err = TimelineError;

  fn from_str(raw: &str) -> TimelineResult<Self> {
    let status = match raw.trim().to_ascii_uppercase().as_str() {
      "PENDING" | "RECEIVED" => OrderStatus::Received,
      "CONFIRMED" => OrderStatus::Confirmed,
      "PROCESSING" => OrderStatus::Processing,
      "SHIPPED" => OrderStatus::Shipped,
      "DELIVERED" => OrderStatus::Delivered,
      "CANCELLED" | "CANCELED" => OrderStatus::Cancelled,
      _ => {
        return Err(TimelineError::UnknownStatus {
          status: raw.to_string(),
        })
      }
    };
    Ok(status)
  }
}

impl fmt::Display for OrderStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      OrderStatus::Received => "RECEIVED",
      OrderStatus::Confirmed => "CONFIRMED",
      OrderStatus::Processing => "PROCESSING",
      OrderStatus::Shipped => "SHIPPED",
      OrderStatus::Delivered => "DELIVERED",
      OrderStatus::Cancelled => "CANCELLED",
    };
    f.write_str(name)
  }
}
