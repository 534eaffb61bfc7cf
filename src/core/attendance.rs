use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceRecord;
use crate::models::interval::TimerInterval;
use crate::utils::time::to_zoned;
use chrono::{Local, TimeZone};
use std::fmt::Display;

/// Turns staged intervals into attendance records.
pub struct AttendanceBuilder;

impl AttendanceBuilder {
    /// Build one record per interval using the local timezone.
    pub fn build(
        intervals: &[TimerInterval],
        message: &str,
        now: f64,
    ) -> AppResult<Vec<AttendanceRecord>> {
        Self::build_in(intervals, message, now, &Local)
    }

    /// Build one record per interval in `tz`.
    ///
    /// Open intervals end at `now`. Every record carries `message`. An
    /// interval whose start and end fall on different calendar dates is
    /// rejected with [`AppError::CrossMidnight`].
    pub fn build_in<Tz: TimeZone>(
        intervals: &[TimerInterval],
        message: &str,
        now: f64,
        tz: &Tz,
    ) -> AppResult<Vec<AttendanceRecord>>
    where
        Tz::Offset: Display,
    {
        let mut records = Vec::with_capacity(intervals.len());

        for (idx, interval) in intervals.iter().enumerate() {
            let end = interval.effective_end(now);
            let start_dt = to_zoned(interval.start, tz)?;
            let end_dt = to_zoned(end, tz)?;

            if start_dt.date_naive() != end_dt.date_naive() {
                return Err(AppError::CrossMidnight {
                    index: idx + 1,
                    start: start_dt.format("%Y-%m-%d %H:%M:%S").to_string(),
                    end: end_dt.format("%Y-%m-%d %H:%M:%S").to_string(),
                });
            }

            records.push(AttendanceRecord {
                comment: message.to_string(),
                date: start_dt.format("%Y-%m-%d").to_string(),
                start_time: start_dt.format("%H:%M:%S").to_string(),
                end_time: end_dt.format("%H:%M:%S").to_string(),
                seconds: end - interval.start,
            });
        }

        Ok(records)
    }
}
