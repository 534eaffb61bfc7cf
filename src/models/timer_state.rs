use super::interval::TimerInterval;

/// Derived state of the timer, computed from the last staged interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerState {
    Idle,
    Running(TimerInterval),
}

impl TimerState {
    pub fn of(intervals: &[TimerInterval]) -> Self {
        match intervals.last() {
            Some(last) if last.is_open() => TimerState::Running(*last),
            _ => TimerState::Idle,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, TimerState::Running(_))
    }
}
