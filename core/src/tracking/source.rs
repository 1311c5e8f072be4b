// order_timeline/src/tracking/source.rs

//! Defines the `OrderSource` trait, the seam to the order-retrieval service,
//! and an in-memory implementation.

use super::record::OrderRecord;
use crate::error::{TimelineError, TimelineResult};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// Where order records come from. In the storefront this is a REST endpoint;
/// implementations report transport failures through `TimelineError::Source`.
#[async_trait]
pub trait OrderSource: Send + Sync + 'static {
  async fn fetch_order(&self, order_id: u64) -> TimelineResult<Option<OrderRecord>>;

  async fn list_orders(&self) -> TimelineResult<Vec<OrderRecord>>;
}

/// Orders held in memory, keyed and listed by order id.
#[derive(Debug, Default)]
pub struct InMemoryOrderSource {
  orders: RwLock<BTreeMap<u64, OrderRecord>>,
}

impl InMemoryOrderSource {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_records(records: impl IntoIterator<Item = OrderRecord>) -> Self {
    let source = Self::new();
    for record in records {
      source.insert(record);
    }
    source
  }

  /// Loads a JSON array of order records in the REST payload shape.
  /// A payload that does not decode is `TimelineError::InvalidInput`.
  pub fn from_json(json: &str) -> TimelineResult<Self> {
    let records: Vec<OrderRecord> = serde_json::from_str(json)
      .map_err(|e| TimelineError::invalid_input("order records payload", format!("failed to decode: {}", e)))?;
    tracing::debug!(count = records.len(), "Loaded order records.");
    Ok(Self::from_records(records))
  }

  /// Inserts or replaces a record, returning the previous one.
  pub fn insert(&self, record: OrderRecord) -> Option<OrderRecord> {
    self.orders.write().insert(record.order_id, record)
  }

  /// Updates the status of a known order. Returns false when the order is absent.
  pub fn set_status(&self, order_id: u64, status: impl Into<String>) -> bool {
    match self.orders.write().get_mut(&order_id) {
      Some(record) => {
        record.status = Some(status.into());
        true
      }
      None => false,
    }
  }

  pub fn len(&self) -> usize {
    self.orders.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.orders.read().is_empty()
  }
}

#[async_trait]
impl OrderSource for InMemoryOrderSource {
  async fn fetch_order(&self, order_id: u64) -> TimelineResult<Option<OrderRecord>> {
    Ok(self.orders.read().get(&order_id).cloned())
  }

  async fn list_orders(&self) -> TimelineResult<Vec<OrderRecord>> {
    Ok(self.orders.read().values().cloned().collect())
  }
}
