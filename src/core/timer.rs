use crate::errors::AppResult;
use crate::models::interval::TimerInterval;
use crate::models::timer_state::TimerState;
use crate::store::TimerStore;

#[derive(Debug, Clone, PartialEq)]
pub enum StartOutcome {
    Started(TimerInterval),
    AlreadyRunning(TimerInterval),
}

#[derive(Debug, Clone, PartialEq)]
pub enum StopOutcome {
    Stopped(TimerInterval),
    NotRunning,
}

/// One line of a status report.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalStatus {
    pub index: usize, // 1-based position in the log
    pub start: f64,
    pub end: Option<f64>,
    pub duration: f64,
}

impl IntervalStatus {
    fn of(index: usize, interval: &TimerInterval, now: f64) -> Self {
        Self {
            index,
            start: interval.start,
            end: interval.end,
            duration: interval.duration(now),
        }
    }

    pub fn is_running(&self) -> bool {
        self.end.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatusReport {
    NoTimer,
    Last(IntervalStatus),
    All {
        entries: Vec<IntervalStatus>,
        total: f64,
    },
}

/// Start/stop/status/reset transitions on top of a [`TimerStore`].
///
/// `now` is passed in by the caller (epoch seconds) so every transition is
/// deterministic for a given store content.
pub struct TimerLogic;

impl TimerLogic {
    pub fn state<S: TimerStore + ?Sized>(store: &S) -> AppResult<TimerState> {
        Ok(TimerState::of(&store.load()?))
    }

    pub fn start<S: TimerStore + ?Sized>(store: &mut S, now: f64) -> AppResult<StartOutcome> {
        let intervals = store.load()?;

        if let TimerState::Running(current) = TimerState::of(&intervals) {
            return Ok(StartOutcome::AlreadyRunning(current));
        }

        let interval = TimerInterval::open(now);
        store.append(&interval)?;
        Ok(StartOutcome::Started(interval))
    }

    pub fn stop<S: TimerStore + ?Sized>(store: &mut S, now: f64) -> AppResult<StopOutcome> {
        let mut intervals = store.load()?;

        match intervals.last_mut() {
            Some(last) if last.is_open() => {
                last.end = Some(now);
                let stopped = *last;
                store.overwrite(&intervals)?;
                Ok(StopOutcome::Stopped(stopped))
            }
            _ => Ok(StopOutcome::NotRunning),
        }
    }

    pub fn status<S: TimerStore + ?Sized>(
        store: &S,
        aggregate: bool,
        now: f64,
    ) -> AppResult<StatusReport> {
        let intervals = store.load()?;

        let Some(last) = intervals.last() else {
            return Ok(StatusReport::NoTimer);
        };

        if !aggregate {
            return Ok(StatusReport::Last(IntervalStatus::of(
                intervals.len(),
                last,
                now,
            )));
        }

        let entries: Vec<IntervalStatus> = intervals
            .iter()
            .enumerate()
            .map(|(i, interval)| IntervalStatus::of(i + 1, interval, now))
            .collect();
        let total = entries.iter().map(|e| e.duration).sum();

        Ok(StatusReport::All { entries, total })
    }

    pub fn reset<S: TimerStore + ?Sized>(store: &mut S) -> AppResult<()> {
        store.clear()
    }
}
