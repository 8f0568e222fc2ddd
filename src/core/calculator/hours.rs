use crate::config::Config;
use chrono::NaiveTime;

/// Rates applied when a day is closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayRates {
    pub hourly_rate: f64,
    pub lunch_deduction_hours: f64,
}

impl Default for PayRates {
    fn default() -> Self {
        Self {
            hourly_rate: 30.0,
            lunch_deduction_hours: 1.0,
        }
    }
}

impl From<&Config> for PayRates {
    fn from(cfg: &Config) -> Self {
        Self {
            hourly_rate: cfg.hourly_rate,
            lunch_deduction_hours: cfg.lunch_deduction_hours(),
        }
    }
}

/// Hours between `clock_in` and `clock_out` minus the lunch deduction,
/// never below zero. Not rounded.
pub fn worked_hours(clock_in: NaiveTime, clock_out: NaiveTime, lunch_hours: f64) -> f64 {
    let span = (clock_out - clock_in).num_seconds() as f64 / 3600.0;
    (span - lunch_hours).max(0.0)
}

/// Pay owed for `hours` (unrounded) at `rate`, rounded to cents.
pub fn pay_for(hours: f64, rate: f64) -> f64 {
    round2(hours * rate)
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
