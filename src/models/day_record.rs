use super::month_key::MonthKey;
use crate::core::calculator::{PayRates, pay_for, round2, worked_hours};
use chrono::{NaiveDate, NaiveTime};

pub const TIME_FORMAT: &str = "%H:%M:%S";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One workday: the clock-in/clock-out pair and the figures derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRecord {
    pub date: NaiveDate,                // ⇔ "Data" (YYYY-MM-DD)
    pub clock_in: Option<NaiveTime>,    // ⇔ "Hora Entrada" (HH:MM:SS)
    pub clock_out: Option<NaiveTime>,   // ⇔ "Hora Saída" (HH:MM:SS)
    pub hours_worked: Option<f64>,      // ⇔ "Horas Trabalhadas"
    pub pay_amount: Option<f64>,        // ⇔ "Valor Recebido"
    pub month_key: MonthKey,            // ⇔ "Mês" (YYYY-MM)
}

impl DayRecord {
    /// New open record for `date`, clocked in at `clock_in`.
    pub fn open(date: NaiveDate, clock_in: NaiveTime) -> Self {
        Self {
            date,
            clock_in: Some(clock_in),
            clock_out: None,
            hours_worked: None,
            pay_amount: None,
            month_key: MonthKey::from_date(date),
        }
    }

    /// A record is open until its clock-out is set.
    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }

    /// Fill clock-out and the derived figures.
    pub fn close(&mut self, clock_out: NaiveTime, rates: &PayRates) {
        let hours = match self.clock_in {
            Some(clock_in) => worked_hours(clock_in, clock_out, rates.lunch_deduction_hours),
            None => 0.0,
        };

        self.clock_out = Some(clock_out);
        self.hours_worked = Some(round2(hours));
        self.pay_amount = Some(pay_for(hours, rates.hourly_rate));
    }

    pub fn date_str(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    pub fn clock_in_str(&self) -> String {
        fmt_time(self.clock_in)
    }

    pub fn clock_out_str(&self) -> String {
        fmt_time(self.clock_out)
    }
}

fn fmt_time(t: Option<NaiveTime>) -> String {
    t.map(|t| t.format(TIME_FORMAT).to_string())
        .unwrap_or_default()
}
