//! Error type for the fallible edges of the engine.
//!
//! The aggregation engine itself never fails: malformed values degrade to
//! defaults. Errors only exist where the crate touches the outside world,
//! reading a record snapshot, parsing caller-supplied dates and times, and
//! writing export files. Commands wrap these in `anyhow` for display.

use chrono::NaiveDate;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorktallyError {
    // ---------------------------
    // Record snapshot
    // ---------------------------
    #[error("Failed to read records from {path}: {source}")]
    RecordsRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed records JSON: {0}")]
    RecordsJson(#[from] serde_json::Error),

    #[error("Expected a JSON array of records or a data/records envelope, found {0}")]
    UnexpectedShape(String),

    // ---------------------------
    // Caller-supplied parameters
    // ---------------------------
    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid time of day: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid timestamp: {0} (expected YYYY-MM-DD HH:MM)")]
    InvalidTimestamp(String),

    // ---------------------------
    // Export
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type Result<T> = std::result::Result<T, WorktallyError>;
