// order_timeline/src/timeline/milestone.rs

use crate::core::stage::Stage;
use serde::Serialize;

/// The next stage an order is waiting on, with a whole-day countdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextMilestone {
  pub stage: Stage,
  pub offset_days: u32,
  pub label: String,
  pub description: String,
  /// Whole days until `stage` is projected. 0 once delivery is due.
  pub remaining_days: u32,
  /// True once every stage has been reached and nothing is pending.
  pub reached_terminal: bool,
}

/// Resolves the next unreached milestone for an order `days_elapsed` days old.
///
/// `days_elapsed` is already floored, so `offset - days_elapsed` is the ceiling
/// of the exact remaining span: the countdown reads "at least N days".
pub fn next_milestone(days_elapsed: u32) -> NextMilestone {
  let target = Stage::ALL[1..]
    .iter()
    .copied()
    .find(|stage| days_elapsed < stage.offset_days());

  let Some(stage) = target else {
    return NextMilestone {
      stage: Stage::Delivered,
      offset_days: Stage::Delivered.offset_days(),
      label: "Order Delivered".to_string(),
      description: "Your order has been delivered".to_string(),
      remaining_days: 0,
      reached_terminal: true,
    };
  };

  let remaining_days = stage.offset_days() - days_elapsed;
  let (label, verb) = match stage {
    Stage::Confirmed => ("Order Confirmation", "confirmed"),
    Stage::Shipped => ("Order Shipping", "shipped"),
    Stage::Received | Stage::Delivered => ("Order Delivery", "delivered"),
  };

  NextMilestone {
    stage,
    offset_days: stage.offset_days(),
    label: label.to_string(),
    description: countdown_description(verb, remaining_days),
    remaining_days,
    reached_terminal: false,
  }
}

fn countdown_description(verb: &str, remaining_days: u32) -> String {
  match remaining_days {
    1 if verb == "confirmed" => "Your order will be confirmed tomorrow".to_string(),
    1 => format!("Your order will be {} in 1 day", verb),
    n => format!("Your order will be {} in {} days", verb, n),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fresh_order_waits_on_confirmation() {
    let m = next_milestone(0);
    assert_eq!(m.stage, Stage::Confirmed);
    assert_eq!(m.remaining_days, 1);
    assert_eq!(m.label, "Order Confirmation");
    assert_eq!(m.description, "Your order will be confirmed tomorrow");
    assert!(!m.reached_terminal);
  }

  #[test]
  fn confirmed_order_counts_down_to_shipping() {
    let m = next_milestone(1);
    assert_eq!((m.stage, m.remaining_days), (Stage::Shipped, 2));
    assert_eq!(m.description, "Your order will be shipped in 2 days");
    let m = next_milestone(2);
    assert_eq!(m.description, "Your order will be shipped in 1 day");
  }

  #[test]
  fn shipped_order_counts_down_to_delivery() {
    let m = next_milestone(3);
    assert_eq!((m.stage, m.remaining_days), (Stage::Delivered, 2));
    assert_eq!(m.label, "Order Delivery");
    assert_eq!(next_milestone(4).remaining_days, 1);
  }

  #[test]
  fn terminal_after_delivery_day() {
    for days in [5, 6, 365] {
      let m = next_milestone(days);
      assert_eq!(m.stage, Stage::Delivered);
      assert_eq!(m.remaining_days, 0);
      assert!(m.reached_terminal);
      assert_eq!(m.description, "Your order has been delivered");
    }
  }
}
