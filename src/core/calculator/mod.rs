pub mod hours;
pub mod totals;

pub use hours::{PayRates, pay_for, round2, worked_hours};
pub use totals::sum_month;
