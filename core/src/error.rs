// order_timeline/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimelineError {
  #[error("Invalid input '{input}': {reason}")]
  InvalidInput { input: String, reason: String },

  #[error("Unknown order status: '{status}'")]
  UnknownStatus { status: String },

  /// A cancelled order reached the stage arithmetic. Callers are expected to
  /// branch on `OrderStatus::Cancelled` before estimating.
  #[error("Order is cancelled; no delivery timeline can be projected")]
  CancelledOrder,

  #[error("Order not found: {order_id}")]
  OrderNotFound { order_id: u64 },

  #[error("Order source failed. Source: {source}")]
  Source {
    #[source]
    source: AnyhowError,
  },
}

impl TimelineError {
  pub(crate) fn invalid_input(input: impl Into<String>, reason: impl Into<String>) -> Self {
    TimelineError::InvalidInput {
      input: input.into(),
      reason: reason.into(),
    }
  }
}

// Anything an OrderSource implementation bubbles up through anyhow lands here,
// unless it was a TimelineError to begin with.
impl From<AnyhowError> for TimelineError {
  fn from(err: AnyhowError) -> Self {
    match err.downcast::<TimelineError>() {
      Ok(timeline_err) => timeline_err,
      Err(err) => TimelineError::Source { source: err },
    }
  }
}

pub type TimelineResult<T, E = TimelineError> = std::result::Result<T, E>;
