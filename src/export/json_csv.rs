// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, record_to_row};
use crate::export::{DayRecordExport, notify_export_success};
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// JSON array of objects keyed by the store's column names.
pub(crate) fn export_json(records: &[DayRecordExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(records)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
    fs::write(path, json_data)?;

    notify_export_success("JSON", path);
    Ok(())
}

/// CSV with the same header and cell layout as the record store.
pub(crate) fn export_csv(records: &[DayRecordExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(get_headers())?;
    for r in records {
        wtr.write_record(record_to_row(r))?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
