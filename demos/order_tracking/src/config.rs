// demos/order_tracking/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use chrono::{DateTime, Utc};
use dotenvy::dotenv;
use order_timeline::config::DEFAULT_CACHE_CAPACITY;
use order_timeline::{EstimatorConfig, UnknownStatusPolicy};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
  /// JSON array of order records in the order service's REST shape.
  pub orders_file: PathBuf,
  pub unknown_status: UnknownStatusPolicy,
  pub cache_capacity: usize,
  /// Pins the clock; the system clock is used when absent.
  pub tracking_now: Option<DateTime<Utc>>,
  /// Print each tracking view as JSON instead of text lines.
  pub json_output: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let orders_file = PathBuf::from(get_env("ORDERS_FILE")?);

    let unknown_status = get_env("UNKNOWN_STATUS_POLICY")
      .unwrap_or_else(|_| "reject".to_string())
      .parse::<UnknownStatusPolicy>()
      .map_err(|e| AppError::Config(format!("Invalid UNKNOWN_STATUS_POLICY: {}", e)))?;

    let cache_capacity = get_env("SNAPSHOT_CACHE_CAPACITY")
      .unwrap_or_else(|_| DEFAULT_CACHE_CAPACITY.to_string())
      .parse::<usize>()
      .map_err(|e| AppError::Config(format!("Invalid SNAPSHOT_CACHE_CAPACITY: {}", e)))?;

    let tracking_now = match get_env("TRACKING_NOW") {
      Ok(raw) => Some(
        DateTime::parse_from_rfc3339(raw.trim())
          .map_err(|e| AppError::Config(format!("Invalid TRACKING_NOW '{}': {}", raw, e)))?
          .with_timezone(&Utc),
      ),
      Err(_) => None,
    };

    let json_output = get_env("JSON_OUTPUT")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid JSON_OUTPUT value: {}", e)))?;

    let config = Self {
      orders_file,
      unknown_status,
      cache_capacity,
      tracking_now,
      json_output,
    };
    tracing::info!("Application configuration loaded successfully.");
    tracing::debug!(config = ?config, "Loaded config details");
    Ok(config)
  }

  pub fn estimator_config(&self) -> EstimatorConfig {
    EstimatorConfig::default()
      .with_unknown_status(self.unknown_status)
      .with_cache_capacity(self.cache_capacity)
  }
}
