use super::hours::round2;
use crate::models::{DayRecord, MonthKey, MonthTotals};

/// Sum hours and pay over the records of `month`; missing values count as 0.
pub fn sum_month(records: &[DayRecord], month: MonthKey) -> MonthTotals {
    let mut totals = MonthTotals::empty(month);

    for r in records.iter().filter(|r| r.month_key == month) {
        totals.total_hours += r.hours_worked.unwrap_or(0.0);
        totals.total_pay += r.pay_amount.unwrap_or(0.0);
        totals.days += 1;
        if r.is_open() {
            totals.open_days += 1;
        }
    }

    totals.total_hours = round2(totals.total_hours);
    totals.total_pay = round2(totals.total_pay);
    totals
}
