//! Durable storage of timer intervals.
//!
//! The on-disk format is the plain `start,end` staging file; the
//! [`TimerStore`] trait lets the state machine run against an in-memory
//! store in tests.

pub mod file;
pub mod journal;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::errors::{AppError, AppResult};
use crate::models::interval::TimerInterval;

/// Default staging file name, relative to the working directory.
pub const STAGING_FILE: &str = "plog.staging";

pub trait TimerStore {
    /// Read every staged interval, oldest first. Empty when nothing is staged.
    fn load(&self) -> AppResult<Vec<TimerInterval>>;

    /// Append one interval without touching the existing ones.
    fn append(&mut self, interval: &TimerInterval) -> AppResult<()>;

    /// Replace the whole log.
    fn overwrite(&mut self, intervals: &[TimerInterval]) -> AppResult<()>;

    /// Drop the log. Succeeds when nothing is staged.
    fn clear(&mut self) -> AppResult<()>;
}

/// Parse the staging text. `origin` only feeds error messages.
pub fn parse_log(text: &str, origin: &str) -> AppResult<Vec<TimerInterval>> {
    let mut intervals: Vec<TimerInterval> = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let interval = TimerInterval::from_line(line).map_err(|reason| AppError::StateFormat {
            path: origin.to_string(),
            line: idx + 1,
            reason,
        })?;

        // only the last record may still be running
        if let Some(prev) = intervals.last()
            && prev.is_open()
        {
            return Err(AppError::StateFormat {
                path: origin.to_string(),
                line: idx,
                reason: "open timer is followed by another record".into(),
            });
        }

        intervals.push(interval);
    }

    Ok(intervals)
}

/// Render intervals back to the staging text, one line each.
pub fn render_log(intervals: &[TimerInterval]) -> String {
    let mut out = String::new();
    for interval in intervals {
        out.push_str(&interval.to_line());
        out.push('\n');
    }
    out
}
