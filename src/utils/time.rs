//! Time utilities: epoch seconds <-> zoned datetimes.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, TimeZone, Utc};

/// Current wall clock as epoch seconds with microsecond precision.
pub fn now_epoch() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

/// Convert epoch seconds into a datetime of the given zone.
pub fn to_zoned<Tz: TimeZone>(epoch: f64, tz: &Tz) -> AppResult<DateTime<Tz>> {
    if !epoch.is_finite() {
        return Err(AppError::InvalidTimestamp(epoch));
    }

    let secs = epoch.floor();
    let nanos = (((epoch - secs) * 1e9).round() as u32).min(999_999_999);

    DateTime::from_timestamp(secs as i64, nanos)
        .map(|utc| utc.with_timezone(tz))
        .ok_or(AppError::InvalidTimestamp(epoch))
}
