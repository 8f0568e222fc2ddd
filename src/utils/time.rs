//! Time utilities: tolerant parsing of store cells, CLI timestamps, number formatting.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse a time-of-day cell: `HH:MM:SS`, `HH:MM` or a full datetime.
/// Fractional seconds are dropped.
pub fn parse_time_cell(s: &str) -> Option<NaiveTime> {
    let s = s.trim();

    for fmt in ["%H:%M:%S%.f", "%H:%M"] {
        if let Ok(t) = NaiveTime::parse_from_str(s, fmt) {
            return t.with_nanosecond(0);
        }
    }

    parse_datetime(s).and_then(|dt| dt.time().with_nanosecond(0))
}

/// Parse a date cell: `YYYY-MM-DD`, optionally followed by a time part.
pub fn parse_date_cell(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_datetime(s).map(|dt| dt.date()))
}

fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Timestamp for a clock event given on the command line.
pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    parse_datetime(s.trim()).ok_or_else(|| AppError::InvalidTime(s.to_string()))
}

/// Local wall-clock time truncated to whole seconds.
pub fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

pub fn parse_amount(s: &str) -> Option<f64> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Two decimals, empty for missing values.
pub fn format_amount(v: Option<f64>) -> String {
    v.map(|v| format!("{v:.2}")).unwrap_or_default()
}
