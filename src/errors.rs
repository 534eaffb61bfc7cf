//! Unified application error type.
//! Every module (store, core, sink, cli, utils) returns AppError so that the
//! binary can report any failure the same way.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Staging file
    // ---------------------------
    #[error("Malformed staging file {path}, line {line}: {reason}")]
    StateFormat {
        path: String,
        line: usize,
        reason: String,
    },

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(f64),

    // ---------------------------
    // Validation
    // ---------------------------
    #[error(
        "Start and end date of each worklog entry must be the same (timer {index}: {start} -> {end}). Call 'plog status --all' to evaluate."
    )]
    CrossMidnight {
        index: usize,
        start: String,
        end: String,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] serde_yaml::Error),

    // ---------------------------
    // Remote API
    // ---------------------------
    #[error("Remote request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Remote API answered with status {status}: {body}")]
    Remote { status: u16, body: String },

    #[error(
        "Submission stopped after {accepted} of {total} entries were already accepted remotely: {reason}"
    )]
    PartialSubmission {
        accepted: usize,
        total: usize,
        reason: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected response from remote API: {0}")]
    InvalidResponse(String),
}

impl AppError {
    /// True when the error came from the remote side and a plain `push`
    /// retry may succeed.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            AppError::Http(_)
                | AppError::Remote { .. }
                | AppError::PartialSubmission { .. }
                | AppError::InvalidResponse(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
