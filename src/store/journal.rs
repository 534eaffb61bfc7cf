//! Internal activity journal: one tab-separated line per state change.

use crate::errors::AppResult;
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Append an entry to the journal at `path`, creating parent dirs on demand.
pub fn ttlog(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    // local timestamp, ISO 8601
    let now = Local::now().to_rfc3339();

    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(
        file,
        "{}\t{}\t{}\t{}",
        now,
        sanitize(operation),
        sanitize(target),
        sanitize(message)
    )?;

    Ok(())
}

/// Read all journal entries, oldest first. Lines that do not have four
/// fields are skipped.
pub fn read_entries(path: &Path) -> AppResult<Vec<JournalEntry>> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let entries = text
        .lines()
        .filter_map(|line| {
            let mut parts = line.splitn(4, '\t');
            Some(JournalEntry {
                date: parts.next()?.to_string(),
                operation: parts.next()?.to_string(),
                target: parts.next()?.to_string(),
                message: parts.next()?.to_string(),
            })
        })
        .collect();

    Ok(entries)
}

fn sanitize(s: &str) -> String {
    s.replace(['\t', '\n', '\r'], " ")
}
