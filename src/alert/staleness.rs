/// Record freshness detection.
///
/// Viewers poll the shared record every few seconds. If the controller stops
/// writing, every viewer keeps showing the last record with no visible sign
/// that it has gone quiet. This module lets a viewer flag that gap.
///
/// # Clock injection
/// `is_stale_at` takes `now: DateTime<Utc>` rather than calling `Utc::now()`
/// internally, so tests are deterministic without mocking.

use chrono::{DateTime, Utc};

use crate::model::{RecordEnvelope, RecordError};

/// Number of missed poll intervals after which a record counts as stale.
pub const STALE_AFTER_POLLS: u64 = 3;

/// Default staleness threshold in seconds for a given poll interval.
/// Saturates for intervals too large to multiply.
pub fn default_max_age_secs(poll_interval_ms: u64) -> u64 {
    poll_interval_ms
        .saturating_mul(STALE_AFTER_POLLS)
        .div_ceil(1000)
}

/// Age of the record in whole seconds relative to `now`.
///
/// Returns an error if the envelope timestamp is out of range. Timestamps in
/// the future (clock skew between writer and reader) report an age of zero.
pub fn age_secs_at(envelope: &RecordEnvelope, now: DateTime<Utc>) -> Result<u64, RecordError> {
    let written = envelope
        .last_update()
        .ok_or(RecordError::TimestampOutOfRange(envelope.timestamp))?;
    Ok((now - written).num_seconds().max(0) as u64)
}

/// Returns `true` if the record is older than `max_age_secs` relative to `now`.
///
/// Staleness is strictly greater than the threshold:
///   age > max_age_secs  →  stale
///   age == max_age_secs →  not stale
///
/// Callers should treat an `Err` as stale.
pub fn is_stale_at(
    envelope: &RecordEnvelope,
    max_age_secs: u64,
    now: DateTime<Utc>,
) -> Result<bool, RecordError> {
    Ok(age_secs_at(envelope, now)? > max_age_secs)
}

/// Convenience wrapper that uses the real current time.
/// Use `is_stale_at` in tests to keep them deterministic.
pub fn is_stale(envelope: &RecordEnvelope, max_age_secs: u64) -> Result<bool, RecordError> {
    is_stale_at(envelope, max_age_secs, Utc::now())
}
