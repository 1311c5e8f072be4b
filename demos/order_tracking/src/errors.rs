// demos/order_tracking/src/errors.rs

use order_timeline::TimelineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("I/O Error: {0}")]
  Io(#[from] std::io::Error),

  #[error("JSON Error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("Timeline Error: {source}")]
  Timeline {
    #[from] // Allows conversion from order_timeline::TimelineError
    source: TimelineError,
  },
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
