// order_timeline/src/core/timestamp.rs

//! Parsing of order creation timestamps as they arrive from the order service.

use crate::error::{TimelineError, TimelineResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

// Offset-less forms; the backend serializes `LocalDateTime`, which drops
// trailing zero seconds and uses a variable number of fractional digits.
const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
  "%Y-%m-%dT%H:%M:%S%.f",
  "%Y-%m-%d %H:%M:%S%.f",
  "%Y-%m-%dT%H:%M",
];

/// Parses an order timestamp into a UTC instant.
///
/// Accepted forms, tried in order:
/// - epoch milliseconds (`"1704067200000"`),
/// - RFC 3339 with an offset (`"2024-01-01T00:00:00Z"`),
/// - ISO-8601 date-time without an offset, read as UTC (`"2024-01-01T10:30:00.123"`),
/// - a bare date, read as midnight UTC (`"2024-01-01"`).
///
/// Anything else is `TimelineError::InvalidInput`; there is no fallback anchor.
pub fn parse_order_timestamp(raw: &str) -> TimelineResult<DateTime<Utc>> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return Err(TimelineError::invalid_input(raw, "timestamp is empty"));
  }

  if is_integer(trimmed) {
    let millis: i64 = trimmed
      .parse()
      .map_err(|e| TimelineError::invalid_input(raw, format!("epoch milliseconds: {}", e)))?;
    return from_epoch_millis(millis);
  }

  if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
    return Ok(with_offset.with_timezone(&Utc));
  }

  for format in NAIVE_DATE_TIME_FORMATS {
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
      return Ok(naive.and_utc());
    }
  }

  if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
    if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
      return Ok(midnight.and_utc());
    }
  }

  Err(TimelineError::invalid_input(raw, "not a recognised ISO-8601 or epoch timestamp"))
}

pub fn from_epoch_millis(millis: i64) -> TimelineResult<DateTime<Utc>> {
  DateTime::<Utc>::from_timestamp_millis(millis)
    .ok_or_else(|| TimelineError::invalid_input(millis.to_string(), "epoch milliseconds out of range"))
}

fn is_integer(s: &str) -> bool {
  let digits = s.strip_prefix('-').unwrap_or(s);
  !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// An order date exactly as the order service sent it: either a string or a
/// JSON number of epoch milliseconds. Resolved lazily so a malformed value
/// surfaces as `InvalidInput` at estimation time rather than failing the
/// whole payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderDate {
  EpochMillis(i64),
  Text(String),
}

impl OrderDate {
  pub fn resolve(&self) -> TimelineResult<DateTime<Utc>> {
    match self {
      OrderDate::EpochMillis(millis) => from_epoch_millis(*millis),
      OrderDate::Text(raw) => parse_order_timestamp(raw),
    }
  }
}

impl From<DateTime<Utc>> for OrderDate {
  fn from(dt: DateTime<Utc>) -> Self {
    OrderDate::Text(dt.to_rfc3339())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  fn jan_first() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
  }

  #[test]
  fn parses_rfc3339_and_normalises_offset() {
    assert_eq!(parse_order_timestamp("2024-01-01T00:00:00Z").unwrap(), jan_first());
    assert_eq!(parse_order_timestamp("2024-01-01T02:00:00+02:00").unwrap(), jan_first());
  }

  #[test]
  fn parses_offsetless_backend_forms_as_utc() {
    assert_eq!(parse_order_timestamp("2024-01-01T00:00:00").unwrap(), jan_first());
    assert_eq!(parse_order_timestamp("2024-01-01T00:00").unwrap(), jan_first());
    assert_eq!(parse_order_timestamp("2024-01-01 00:00:00.000").unwrap(), jan_first());
    let fractional = parse_order_timestamp("2024-01-01T10:30:15.123456").unwrap();
    assert_eq!(fractional.timestamp_subsec_micros(), 123_456);
  }

  #[test]
  fn parses_bare_date_and_epoch_millis() {
    assert_eq!(parse_order_timestamp("2024-01-01").unwrap(), jan_first());
    assert_eq!(parse_order_timestamp("1704067200000").unwrap(), jan_first());
  }

  #[test]
  fn rejects_garbage_instead_of_anchoring_at_epoch() {
    for raw in ["", "   ", "yesterday", "2024-13-01", "2024-01-01T25:00:00Z", "-"] {
      match parse_order_timestamp(raw) {
        Err(TimelineError::InvalidInput { input, .. }) => assert_eq!(input, raw),
        other => panic!("Expected InvalidInput for {:?}, got {:?}", raw, other),
      }
    }
  }

  #[test]
  fn rejects_out_of_range_epoch() {
    assert!(matches!(
      parse_order_timestamp(&i64::MAX.to_string()),
      Err(TimelineError::InvalidInput { .. })
    ));
  }

  #[test]
  fn order_date_accepts_string_or_number() {
    let text: OrderDate = serde_json::from_str("\"2024-01-01T00:00:00\"").unwrap();
    let number: OrderDate = serde_json::from_str("1704067200000").unwrap();
    assert_eq!(text.resolve().unwrap(), jan_first());
    assert_eq!(number.resolve().unwrap(), jan_first());
  }
}
