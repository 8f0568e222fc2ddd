//! Internal operation log: one CSV line per mutating operation, kept next
//! to the record store (`<store>.log`).

use crate::errors::AppResult;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Log file belonging to the store at `store_path`.
pub fn log_path(store_path: &Path) -> PathBuf {
    store_path.with_extension("log")
}

/// Append an internal log line.
pub fn ttlog(store_path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let path = log_path(store_path);
    let is_new = !path.exists();

    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(is_new)
        .from_writer(file);

    wtr.serialize(LogEntry {
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    })?;
    wtr.flush()?;

    Ok(())
}

/// Read all log lines in the order they were written.
pub fn read_all(store_path: &Path) -> AppResult<Vec<LogEntry>> {
    let path = log_path(store_path);
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut rdr = csv::Reader::from_path(&path)?;
    let mut entries = Vec::new();
    for row in rdr.deserialize() {
        entries.push(row?);
    }
    Ok(entries)
}
