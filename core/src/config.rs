// order_timeline/src/config.rs

//! Estimator configuration. Loading from the environment is the embedding
//! application's job; this is the plain value it hands over.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What to do with a status string outside the known vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownStatusPolicy {
  /// Fail with `TimelineError::UnknownStatus`.
  #[default]
  Reject,
  /// Log and treat the status as absent; completion then follows elapsed time.
  FallBackToElapsed,
}

impl FromStr for UnknownStatusPolicy {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "reject" => Ok(UnknownStatusPolicy::Reject),
      "fallback" | "fall_back_to_elapsed" | "elapsed" => Ok(UnknownStatusPolicy::FallBackToElapsed),
      other => Err(format!("unknown status policy '{}', expected 'reject' or 'fallback'", other)),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatorConfig {
  pub unknown_status: UnknownStatusPolicy,
  /// Maximum memoized snapshots held by a tracker. 0 disables memoization.
  pub cache_capacity: usize,
}

pub const DEFAULT_CACHE_CAPACITY: usize = 256;

impl Default for EstimatorConfig {
  fn default() -> Self {
    Self {
      unknown_status: UnknownStatusPolicy::default(),
      cache_capacity: DEFAULT_CACHE_CAPACITY,
    }
  }
}

impl EstimatorConfig {
  pub fn with_unknown_status(mut self, policy: UnknownStatusPolicy) -> Self {
    self.unknown_status = policy;
    self
  }

  pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
    self.cache_capacity = capacity;
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_reject_unknown_statuses() {
    let config = EstimatorConfig::default();
    assert_eq!(config.unknown_status, UnknownStatusPolicy::Reject);
    assert_eq!(config.cache_capacity, DEFAULT_CACHE_CAPACITY);
  }

  #[test]
  fn policy_parses_from_env_style_strings() {
    assert_eq!("Fallback".parse::<UnknownStatusPolicy>().unwrap(), UnknownStatusPolicy::FallBackToElapsed);
    assert_eq!(" reject ".parse::<UnknownStatusPolicy>().unwrap(), UnknownStatusPolicy::Reject);
    assert!("ignore".parse::<UnknownStatusPolicy>().is_err());
  }
}
