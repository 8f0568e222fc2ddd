//! Flat-file record store: the whole table is read on load and rewritten on save.

pub mod oplog;
pub mod schema;

use crate::errors::{AppError, AppResult};
use crate::models::{DayRecord, MonthKey};
use crate::utils::time::{format_amount, parse_amount, parse_date_cell, parse_time_cell};
use log::warn;
use schema::{
    COL_CLOCK_IN, COL_CLOCK_OUT, COL_DATE, COL_HOURS, COL_MONTH, COL_PAY, COLUMNS, ColumnIndex,
};
use std::fs;
use std::path::{Path, PathBuf};

pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Create an empty store (header only) if none exists yet.
    /// Returns `true` when a new file was written.
    pub fn init(&self) -> AppResult<bool> {
        if self.exists() {
            return Ok(false);
        }
        self.save(&[])?;
        Ok(true)
    }

    /// Load every record in insertion order.
    ///
    /// - missing file → empty table
    /// - missing columns, unreadable rows or invalid dates → `StorageCorrupt`
    /// - malformed time/number cells → `None` (with a warning)
    pub fn load(&self) -> AppResult<Vec<DayRecord>> {
        if !self.exists() {
            return Ok(Vec::new());
        }

        if fs::metadata(&self.path)?.len() == 0 {
            return Ok(Vec::new());
        }

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(|e| self.corrupt(e.to_string()))?;

        let headers = rdr
            .headers()
            .map_err(|e| self.corrupt(format!("unreadable header: {e}")))?
            .clone();

        let idx = ColumnIndex::resolve(&headers)
            .map_err(|missing| self.corrupt(format!("missing columns: {}", missing.join(", "))))?;

        let mut records = Vec::new();

        for (i, row) in rdr.records().enumerate() {
            // header is line 1
            let line = i + 2;
            let row = row.map_err(|e| self.corrupt(format!("line {line}: {e}")))?;

            let raw_date = idx.get(&row, COL_DATE);
            let date = parse_date_cell(raw_date).ok_or_else(|| {
                self.corrupt(format!("line {line}: invalid date '{raw_date}'"))
            })?;

            let record = DayRecord {
                date,
                clock_in: self.time_cell(&idx, &row, COL_CLOCK_IN, line),
                clock_out: self.time_cell(&idx, &row, COL_CLOCK_OUT, line),
                hours_worked: self.amount_cell(&idx, &row, COL_HOURS, line),
                pay_amount: self.amount_cell(&idx, &row, COL_PAY, line),
                month_key: MonthKey::from_date(date),
            };

            let stored_month = idx.get(&row, COL_MONTH);
            if !stored_month.is_empty() && stored_month != record.month_key.to_string() {
                warn!(
                    "line {line}: month '{stored_month}' does not match date {}, using {}",
                    record.date_str(),
                    record.month_key
                );
            }

            records.push(record);
        }

        Ok(records)
    }

    /// Overwrite the store with `records`.
    ///
    /// Rows are written to a sibling temporary file which then replaces the
    /// store, so an interrupted write leaves the previous content in place.
    pub fn save(&self, records: &[DayRecord]) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.tmp_path();

        {
            let mut wtr = csv::Writer::from_path(&tmp)?;
            wtr.write_record(COLUMNS)?;

            for r in records {
                wtr.write_record([
                    r.date_str(),
                    r.clock_in_str(),
                    r.clock_out_str(),
                    format_amount(r.hours_worked),
                    format_amount(r.pay_amount),
                    r.month_key.to_string(),
                ])?;
            }

            wtr.flush()?;
        }

        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn time_cell(
        &self,
        idx: &ColumnIndex,
        row: &csv::StringRecord,
        col: usize,
        line: usize,
    ) -> Option<chrono::NaiveTime> {
        let raw = idx.get(row, col);
        if raw.is_empty() {
            return None;
        }
        let parsed = parse_time_cell(raw);
        if parsed.is_none() {
            warn!(
                "{}: line {line}: malformed time '{raw}' in column '{}', treated as empty",
                self.path.display(),
                COLUMNS[col]
            );
        }
        parsed
    }

    fn amount_cell(
        &self,
        idx: &ColumnIndex,
        row: &csv::StringRecord,
        col: usize,
        line: usize,
    ) -> Option<f64> {
        let raw = idx.get(row, col);
        if raw.is_empty() {
            return None;
        }
        let parsed = parse_amount(raw);
        if parsed.is_none() {
            warn!(
                "{}: line {line}: malformed number '{raw}' in column '{}', treated as empty",
                self.path.display(),
                COLUMNS[col]
            );
        }
        parsed
    }

    fn corrupt(&self, reason: impl Into<String>) -> AppError {
        AppError::corrupt(self.path.display().to_string(), reason)
    }
}
