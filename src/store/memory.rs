//! In-memory store for tests.

use super::{TimerStore, render_log};
use crate::errors::AppResult;
use crate::models::interval::TimerInterval;

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    pub intervals: Vec<TimerInterval>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_intervals(intervals: Vec<TimerInterval>) -> Self {
        Self { intervals }
    }

    /// What a [`super::FileStore`] would hold on disk.
    pub fn snapshot(&self) -> String {
        render_log(&self.intervals)
    }
}

impl TimerStore for MemoryStore {
    fn load(&self) -> AppResult<Vec<TimerInterval>> {
        Ok(self.intervals.clone())
    }

    fn append(&mut self, interval: &TimerInterval) -> AppResult<()> {
        self.intervals.push(*interval);
        Ok(())
    }

    fn overwrite(&mut self, intervals: &[TimerInterval]) -> AppResult<()> {
        self.intervals = intervals.to_vec();
        Ok(())
    }

    fn clear(&mut self) -> AppResult<()> {
        self.intervals.clear();
        Ok(())
    }
}
