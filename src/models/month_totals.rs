use super::month_key::MonthKey;
use serde::Serialize;

/// Aggregated figures for one month of records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthTotals {
    pub month: MonthKey,
    pub total_hours: f64,
    pub total_pay: f64,
    pub days: usize,      // rows matching the month
    pub open_days: usize, // rows without clock-out
}

impl MonthTotals {
    pub fn empty(month: MonthKey) -> Self {
        Self {
            month,
            total_hours: 0.0,
            total_pay: 0.0,
            days: 0,
            open_days: 0,
        }
    }
}
