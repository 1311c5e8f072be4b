// demos/order_tracking/src/main.rs

// Declare modules for the application
mod config;
mod errors;
mod render;

use crate::config::AppConfig;
use crate::errors::Result as AppResult; // Use the app's Result alias

use order_timeline::{Clock, FixedClock, InMemoryOrderSource, OrderTracker, SystemClock, TimelineEstimator};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting order tracking demo...");

  let app_config = match AppConfig::from_env() {
    Ok(cfg) => cfg,
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(e.into());
    }
  };

  run(&app_config).await?;
  tracing::info!("Order tracking demo finished.");
  Ok(())
}

async fn run(app_config: &AppConfig) -> AppResult<()> {
  let payload = tokio::fs::read_to_string(&app_config.orders_file).await?;
  let source = InMemoryOrderSource::from_json(&payload)?;
  tracing::info!(orders = source.len(), file = %app_config.orders_file.display(), "Loaded orders.");

  let clock: Arc<dyn Clock> = match app_config.tracking_now {
    Some(now) => {
      tracing::info!(%now, "Clock pinned by TRACKING_NOW.");
      Arc::new(FixedClock::new(now))
    }
    None => Arc::new(SystemClock),
  };
  let estimator = TimelineEstimator::with_clock(clock).with_config(app_config.estimator_config());
  let tracker = OrderTracker::new(source, estimator);

  for (order_id, result) in tracker.track_all().await? {
    match result {
      Ok(tracking) if app_config.json_output => println!("{}", render::render_json(&tracking)?),
      Ok(tracking) => println!("{}", render::render_text(&tracking)),
      Err(e) => tracing::warn!(order_id, error = %e, "Skipping order that could not be tracked."),
    }
  }

  if let Some(cache) = tracker.cache() {
    let stats = cache.stats();
    tracing::debug!(hits = stats.hits, misses = stats.misses, "Snapshot cache statistics.");
  }
  Ok(())
}
