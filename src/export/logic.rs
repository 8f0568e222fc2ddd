// src/export/logic.rs

use crate::core::report::filter_month;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::DayRecordExport;
use crate::export::xlsx::export_xlsx;
use crate::models::MonthKey;
use crate::store::RecordStore;
use crate::store::oplog::ttlog;
use crate::ui::messages::warning;
use std::fs;
use std::path::{Path, PathBuf};

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export dei record del mese selezionato.
    ///
    /// - `file`: path di output; se assente `<export_dir>/horas_trabalhadas_<YYYY-MM>.<ext>`
    /// - `force`: sovrascrive senza chiedere conferma
    ///
    /// Returns the written path, or `None` when the month has no records.
    pub fn export(
        store: &RecordStore,
        format: ExportFormat,
        month: MonthKey,
        file: Option<&Path>,
        export_dir: &Path,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let month_str = month.to_string();
        let path = match file {
            Some(f) => f.to_path_buf(),
            None => export_dir.join(format.default_file_name(&month_str)),
        };

        let records = filter_month(store.load()?, month);

        if records.is_empty() {
            warning(format!("No records found for {month_str}, nothing exported."));
            return Ok(None);
        }

        ensure_writable(&path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let rows: Vec<DayRecordExport> = records.iter().map(DayRecordExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, &path, &month_str)?,
        }

        if let Err(e) = ttlog(
            store.path(),
            "export",
            &path.to_string_lossy(),
            &format!("{} rows of {month_str} as {}", rows.len(), format.as_str()),
        ) {
            log::warn!("failed to write internal log: {e}");
        }

        Ok(Some(path))
    }
}
