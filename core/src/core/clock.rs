// order_timeline/src/core/clock.rs

//! Wall-clock sources. The estimator reads "now" only through [`Clock`], so
//! tests and renderers can pin it.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

pub trait Clock: Send + Sync + fmt::Debug {
  fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> DateTime<Utc> {
    Utc::now()
  }
}

/// A clock pinned to an instant until told otherwise.
///
/// Clones share the same instant, so a test can hold one handle and advance
/// the clock an estimator was built with.
#[derive(Debug, Clone)]
pub struct FixedClock(Arc<RwLock<DateTime<Utc>>>);

impl FixedClock {
  pub fn new(now: DateTime<Utc>) -> Self {
    FixedClock(Arc::new(RwLock::new(now)))
  }

  pub fn set(&self, now: DateTime<Utc>) {
    *self.0.write() = now;
  }

  pub fn advance(&self, by: chrono::Duration) {
    let mut guard = self.0.write();
    *guard += by;
  }
}

impl Clock for FixedClock {
  fn now(&self) -> DateTime<Utc> {
    *self.0.read()
  }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
  fn now(&self) -> DateTime<Utc> {
    (**self).now()
  }
}
