use super::attendance::AttendanceBuilder;
use crate::errors::AppResult;
use crate::models::attendance::AttendanceRecord;
use crate::models::interval::TimerInterval;
use crate::sink::{SubmitReceipt, WorkLogSink};
use crate::store::TimerStore;
use chrono::{Local, TimeZone};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum PushOutcome {
    NothingToPush,
    Pushed {
        records: Vec<AttendanceRecord>,
        receipt: SubmitReceipt,
        /// The running timer was closed as part of this push.
        closed_running: bool,
    },
}

/// High-level business logic for the `push` command.
pub struct PushLogic;

impl PushLogic {
    pub fn apply<S: TimerStore + ?Sized>(
        store: &mut S,
        sink: &dyn WorkLogSink,
        message: &str,
        now: f64,
    ) -> AppResult<PushOutcome> {
        Self::apply_in(store, sink, message, now, &Local)
    }

    /// Submit every staged interval and clear the store.
    ///
    /// - empty store: nothing is sent
    /// - a running timer is closed at `now`
    /// - validation errors leave the store untouched
    /// - once the records are built the closed timer is persisted, so a
    ///   failed submission can be retried with the same records
    /// - the store is cleared only after the sink accepted everything
    pub fn apply_in<S: TimerStore + ?Sized, Tz: TimeZone>(
        store: &mut S,
        sink: &dyn WorkLogSink,
        message: &str,
        now: f64,
        tz: &Tz,
    ) -> AppResult<PushOutcome>
    where
        Tz::Offset: Display,
    {
        let mut intervals = store.load()?;

        if intervals.is_empty() {
            return Ok(PushOutcome::NothingToPush);
        }

        let closed_running = close_running(&mut intervals, now);
        let records = AttendanceBuilder::build_in(&intervals, message, now, tz)?;

        if closed_running {
            store.overwrite(&intervals)?;
        }

        let receipt = sink.submit(&records)?;
        store.clear()?;

        Ok(PushOutcome::Pushed {
            records,
            receipt,
            closed_running,
        })
    }
}

/// Close the last interval at `now` if it is still open.
fn close_running(intervals: &mut [TimerInterval], now: f64) -> bool {
    match intervals.last_mut() {
        Some(last) if last.is_open() => {
            last.end = Some(now);
            true
        }
        _ => false,
    }
}
