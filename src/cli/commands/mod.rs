pub mod backup;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod months;
pub mod punch;
pub mod totals;

use crate::core::report::default_month;
use crate::errors::AppResult;
use crate::models::{DayRecord, MonthKey};
use crate::utils::date::current_month;

/// Month requested with `--month`, or the latest month in `records`.
pub(crate) fn resolve_month(requested: Option<&str>, records: &[DayRecord]) -> AppResult<MonthKey> {
    match requested {
        Some(m) => m.parse(),
        None => Ok(default_month(records, current_month())),
    }
}
