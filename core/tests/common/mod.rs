// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use once_cell::sync::Lazy;
use order_timeline::{
  EstimatorConfig, FixedClock, InMemoryOrderSource, OrderRecord, OrderSource, TimelineEstimator, TimelineResult,
};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use tracing::Level;

// --- Common Instants ---
pub fn jan_first() -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

pub fn days_after(start: DateTime<Utc>, days: i64) -> DateTime<Utc> {
  start + Duration::days(days)
}

// --- Estimators pinned to a clock ---
pub fn estimator_at(now: DateTime<Utc>) -> (TimelineEstimator<FixedClock>, FixedClock) {
  let clock = FixedClock::new(now);
  (TimelineEstimator::with_clock(clock.clone()), clock)
}

pub fn estimator_with_config(now: DateTime<Utc>, config: EstimatorConfig) -> (TimelineEstimator<FixedClock>, FixedClock) {
  let clock = FixedClock::new(now);
  (TimelineEstimator::with_clock(clock.clone()).with_config(config), clock)
}

pub fn sample_records() -> Vec<OrderRecord> {
  vec![
    OrderRecord::new(1, jan_first(), "PENDING"),
    OrderRecord::new(2, jan_first(), "SHIPPED"),
    OrderRecord::new(3, jan_first(), "CANCELLED"),
    OrderRecord::new(4, jan_first(), "CONFIRMED"),
  ]
}

// --- Sources ---

/// Counts fetches so tests can tell a cache hit from a projection.
pub static FETCH_COUNTER: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));

pub fn reset_counters() {
  FETCH_COUNTER.store(0, Ordering::SeqCst);
}

pub struct CountingSource(pub InMemoryOrderSource);

#[async_trait]
impl OrderSource for CountingSource {
  async fn fetch_order(&self, order_id: u64) -> TimelineResult<Option<OrderRecord>> {
    FETCH_COUNTER.fetch_add(1, Ordering::SeqCst);
    self.0.fetch_order(order_id).await
  }

  async fn list_orders(&self) -> TimelineResult<Vec<OrderRecord>> {
    self.0.list_orders().await
  }
}

/// Simulates the order service being unreachable.
pub struct UnreachableSource;

#[async_trait]
impl OrderSource for UnreachableSource {
  async fn fetch_order(&self, _order_id: u64) -> TimelineResult<Option<OrderRecord>> {
    Err(anyhow::anyhow!("connection refused").into())
  }

  async fn list_orders(&self) -> TimelineResult<Vec<OrderRecord>> {
    Err(anyhow::anyhow!("connection refused").into())
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
