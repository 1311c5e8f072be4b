// order_timeline/src/tracking/cache.rs

//! Memoization of snapshots for repeated renders of the same order.

use crate::core::stage::Stage;
use crate::error::TimelineResult;
use crate::timeline::TimelineSnapshot;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{event, Level};

/// Everything a snapshot is a function of. Two equal keys always project
/// identical snapshots, so serving from the cache is unobservable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnapshotKey {
  pub order_id: u64,
  pub order_created_at: DateTime<Utc>,
  pub authoritative_stage: Option<Stage>,
  pub days_elapsed: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
  pub hits: u64,
  pub misses: u64,
}

/// Bounded snapshot memo. Holds at most one snapshot per order; when the
/// bound is hit the whole map is dropped.
#[derive(Debug)]
pub struct SnapshotCache {
  capacity: usize,
  entries: Mutex<HashMap<SnapshotKey, TimelineSnapshot>>,
  hits: AtomicU64,
  misses: AtomicU64,
}

impl SnapshotCache {
  pub fn new(capacity: usize) -> Self {
    Self {
      capacity,
      entries: Mutex::new(HashMap::new()),
      hits: AtomicU64::new(0),
      misses: AtomicU64::new(0),
    }
  }

  pub fn get_or_try_insert_with<F>(&self, key: SnapshotKey, project: F) -> TimelineResult<TimelineSnapshot>
  where
    F: FnOnce() -> TimelineResult<TimelineSnapshot>,
  {
    if let Some(hit) = self.entries.lock().get(&key) {
      self.hits.fetch_add(1, Ordering::Relaxed);
      event!(Level::DEBUG, order_id = key.order_id, days_elapsed = key.days_elapsed, "Snapshot cache hit.");
      return Ok(hit.clone());
    }

    self.misses.fetch_add(1, Ordering::Relaxed);
    event!(Level::DEBUG, order_id = key.order_id, days_elapsed = key.days_elapsed, "Snapshot cache miss.");
    let snapshot = project()?;

    if self.capacity > 0 {
      let mut entries = self.entries.lock();
      // A newer day or status supersedes whatever was held for this order.
      entries.retain(|held, _| held.order_id != key.order_id);
      if entries.len() >= self.capacity {
        event!(Level::DEBUG, capacity = self.capacity, "Snapshot cache full; clearing.");
        entries.clear();
      }
      entries.insert(key, snapshot.clone());
    }
    Ok(snapshot)
  }

  pub fn len(&self) -> usize {
    self.entries.lock().len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.lock().is_empty()
  }

  pub fn capacity(&self) -> usize {
    self.capacity
  }

  pub fn clear(&self) {
    self.entries.lock().clear();
  }

  pub fn stats(&self) -> CacheStats {
    CacheStats {
      hits: self.hits.load(Ordering::Relaxed),
      misses: self.misses.load(Ordering::Relaxed),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  fn key(order_id: u64, days_elapsed: u32) -> SnapshotKey {
    SnapshotKey {
      order_id,
      order_created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
      authoritative_stage: None,
      days_elapsed,
    }
  }

  fn project(k: SnapshotKey) -> TimelineResult<TimelineSnapshot> {
    TimelineSnapshot::project(k.order_created_at, k.authoritative_stage, k.days_elapsed)
  }

  #[test]
  fn second_lookup_is_a_hit() {
    let cache = SnapshotCache::new(8);
    let k = key(1, 2);
    let first = cache.get_or_try_insert_with(k, || project(k)).unwrap();
    let second = cache
      .get_or_try_insert_with(k, || panic!("should have been served from cache"))
      .unwrap();
    assert_eq!(first, second);
    assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
  }

  #[test]
  fn newer_day_replaces_older_entry_for_same_order() {
    let cache = SnapshotCache::new(8);
    for days in 0..4 {
      let k = key(7, days);
      cache.get_or_try_insert_with(k, || project(k)).unwrap();
    }
    assert_eq!(cache.len(), 1);
  }

  #[test]
  fn full_cache_is_cleared_and_zero_capacity_stores_nothing() {
    let cache = SnapshotCache::new(2);
    for order_id in 0..3 {
      let k = key(order_id, 0);
      cache.get_or_try_insert_with(k, || project(k)).unwrap();
    }
    assert_eq!(cache.len(), 1);

    let disabled = SnapshotCache::new(0);
    let k = key(1, 0);
    disabled.get_or_try_insert_with(k, || project(k)).unwrap();
    assert!(disabled.is_empty());
  }

  #[test]
  fn failed_projection_is_not_cached() {
    let cache = SnapshotCache::new(4);
    let k = key(3, 1);
    let err = cache.get_or_try_insert_with(k, || Err(crate::error::TimelineError::CancelledOrder));
    assert!(err.is_err());
    assert!(cache.is_empty());
  }
}
