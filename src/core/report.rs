use crate::core::calculator::sum_month;
use crate::errors::AppResult;
use crate::models::{DayRecord, MonthKey, MonthTotals};
use crate::store::RecordStore;
use crate::utils::date::current_month;

/// Read-only queries over the record store.
pub struct ReportLogic;

impl ReportLogic {
    pub fn totals(store: &RecordStore, month: MonthKey) -> AppResult<MonthTotals> {
        let records = store.load()?;
        Ok(sum_month(&records, month))
    }

    /// Distinct month keys in first-appearance order; the current month
    /// when the store is empty.
    pub fn months(store: &RecordStore) -> AppResult<Vec<MonthKey>> {
        let records = store.load()?;
        Ok(selectable_months(&records, current_month()))
    }

    pub fn records_for(store: &RecordStore, month: MonthKey) -> AppResult<Vec<DayRecord>> {
        let records = store.load()?;
        Ok(filter_month(records, month))
    }
}

pub fn distinct_months(records: &[DayRecord]) -> Vec<MonthKey> {
    let mut months: Vec<MonthKey> = Vec::new();
    for r in records {
        if !months.contains(&r.month_key) {
            months.push(r.month_key);
        }
    }
    months
}

pub fn selectable_months(records: &[DayRecord], fallback: MonthKey) -> Vec<MonthKey> {
    let months = distinct_months(records);
    if months.is_empty() {
        vec![fallback]
    } else {
        months
    }
}

/// Month shown when none is requested: the latest one in the store.
pub fn default_month(records: &[DayRecord], fallback: MonthKey) -> MonthKey {
    distinct_months(records)
        .into_iter()
        .max()
        .unwrap_or(fallback)
}

pub fn filter_month(records: Vec<DayRecord>, month: MonthKey) -> Vec<DayRecord> {
    records
        .into_iter()
        .filter(|r| r.month_key == month)
        .collect()
}
