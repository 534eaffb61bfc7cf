//! Staging file backed store.

use super::{TimerStore, parse_log, render_log};
use crate::errors::AppResult;
use crate::models::interval::TimerInterval;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    fn origin(&self) -> String {
        self.path.display().to_string()
    }
}

impl TimerStore for FileStore {
    fn load(&self) -> AppResult<Vec<TimerInterval>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => parse_log(&text, &self.origin()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn append(&mut self, interval: &TimerInterval) -> AppResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", interval.to_line())?;
        Ok(())
    }

    fn overwrite(&mut self, intervals: &[TimerInterval]) -> AppResult<()> {
        fs::write(&self.path, render_log(intervals))?;
        Ok(())
    }

    fn clear(&mut self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
