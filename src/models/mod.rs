pub mod day_record;
pub mod month_key;
pub mod month_totals;

pub use day_record::DayRecord;
pub use month_key::MonthKey;
pub use month_totals::MonthTotals;
