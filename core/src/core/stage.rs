// order_timeline/src/core/stage.rs

//! The forward order lifecycle and its fixed schedule.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Days after order creation at which delivery is expected.
pub const DELIVERY_OFFSET_DAYS: u32 = 5;

/// One step of the forward order lifecycle.
///
/// Variants are declared in lifecycle order, so the derived `Ord` is the
/// fixed total order `Received < Confirmed < Shipped < Delivered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
  Received,
  Confirmed,
  Shipped,
  Delivered,
}

/// Static schedule row for a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageDescriptor {
  pub stage: Stage,
  /// Days after order creation at which this stage is projected.
  pub offset_days: u32,
  pub label: &'static str,
  pub description: &'static str,
}

static DESCRIPTORS: [StageDescriptor; 4] = [
  StageDescriptor {
    stage: Stage::Received,
    offset_days: 0,
    label: "Order Received",
    description: "Your order has been received",
  },
  StageDescriptor {
    stage: Stage::Confirmed,
    offset_days: 1,
    label: "Order Confirmed",
    description: "Your order has been confirmed",
  },
  StageDescriptor {
    stage: Stage::Shipped,
    offset_days: 3,
    label: "Order Shipped",
    description: "Your order has been shipped",
  },
  StageDescriptor {
    stage: Stage::Delivered,
    offset_days: DELIVERY_OFFSET_DAYS,
    label: "Order Delivered",
    description: "Your order has been delivered",
  },
];

impl Stage {
  pub const ALL: [Stage; 4] = [Stage::Received, Stage::Confirmed, Stage::Shipped, Stage::Delivered];

  pub fn rank(self) -> u8 {
    self as u8
  }

  pub fn descriptor(self) -> &'static StageDescriptor {
    &DESCRIPTORS[self.rank() as usize]
  }

  pub fn offset_days(self) -> u32 {
    self.descriptor().offset_days
  }

  /// Infers the stage an order has probably reached after `days_elapsed` whole days.
  ///
  /// Thresholds are checked from the largest offset downward; total over `u32`.
  pub fn from_elapsed_days(days_elapsed: u32) -> Stage {
    Stage::ALL
      .iter()
      .rev()
      .copied()
      .find(|stage| days_elapsed >= stage.offset_days())
      .unwrap_or(Stage::Received)
  }

  /// The stage after this one, if any.
  pub fn next(self) -> Option<Stage> {
    Stage::ALL.get(self.rank() as usize + 1).copied()
  }
}

impl fmt::Display for Stage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Stage::Received => "RECEIVED",
      Stage::Confirmed => "CONFIRMED",
      Stage::Shipped => "SHIPPED",
      Stage::Delivered => "DELIVERED",
    };
    f.write_str(name)
  }
}
