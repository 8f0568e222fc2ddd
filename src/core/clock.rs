use crate::core::calculator::PayRates;
use crate::errors::AppResult;
use crate::models::DayRecord;
use crate::store::RecordStore;
use crate::store::oplog::ttlog;
use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// What a clock event did to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockOutcome {
    Opened,
    Closed,
}

impl ClockOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClockOutcome::Opened => "in",
            ClockOutcome::Closed => "out",
        }
    }
}

pub struct ClockLogic;

impl ClockLogic {
    /// Interpret `now` against the in-memory table.
    ///
    /// Closes the last record when it belongs to the same day and is still
    /// open; otherwise appends a new open record. Earlier rows are never
    /// touched, so an open record left over from a previous day stays open.
    pub fn apply(records: &mut Vec<DayRecord>, now: NaiveDateTime, rates: &PayRates) -> ClockOutcome {
        let today = now.date();
        let time_now = now.time().with_nanosecond(0).unwrap_or(now.time());

        match open_record_for(records, today) {
            Some(record) => {
                record.close(time_now, rates);
                ClockOutcome::Closed
            }
            None => {
                records.push(DayRecord::open(today, time_now));
                ClockOutcome::Opened
            }
        }
    }

    /// Load, apply one clock event, persist the whole table and return it.
    pub fn clock_event(
        store: &RecordStore,
        now: NaiveDateTime,
        rates: &PayRates,
    ) -> AppResult<(ClockOutcome, Vec<DayRecord>)> {
        let mut records = store.load()?;
        let outcome = Self::apply(&mut records, now, rates);
        store.save(&records)?;

        if let Some(last) = records.last() {
            let message = match outcome {
                ClockOutcome::Opened => format!("Clock-in at {}", last.clock_in_str()),
                ClockOutcome::Closed => format!(
                    "Clock-out at {} ({:.2} h)",
                    last.clock_out_str(),
                    last.hours_worked.unwrap_or(0.0)
                ),
            };
            if let Err(e) = ttlog(store.path(), outcome.as_str(), &last.date_str(), &message) {
                log::warn!("failed to write internal log: {e}");
            }
        }

        Ok((outcome, records))
    }
}

/// The record a clock event on `today` would close: only ever the last row.
fn open_record_for(records: &mut [DayRecord], today: NaiveDate) -> Option<&mut DayRecord> {
    records
        .last_mut()
        .filter(|last| last.date == today && last.is_open())
}
