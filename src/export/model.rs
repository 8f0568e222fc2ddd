// src/export/model.rs

use crate::models::DayRecord;
use crate::store::schema::COLUMNS;
use crate::utils::time::format_amount;
use serde::Serialize;

/// Flat, string-valued view of a record using the store's column names.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DayRecordExport {
    #[serde(rename = "Data")]
    pub date: String,
    #[serde(rename = "Hora Entrada")]
    pub clock_in: String,
    #[serde(rename = "Hora Saída")]
    pub clock_out: String,
    #[serde(rename = "Horas Trabalhadas")]
    pub hours_worked: String,
    #[serde(rename = "Valor Recebido")]
    pub pay_amount: String,
    #[serde(rename = "Mês")]
    pub month: String,
}

impl From<&DayRecord> for DayRecordExport {
    fn from(r: &DayRecord) -> Self {
        Self {
            date: r.date_str(),
            clock_in: r.clock_in_str(),
            clock_out: r.clock_out_str(),
            hours_worked: format_amount(r.hours_worked),
            pay_amount: format_amount(r.pay_amount),
            month: r.month_key.to_string(),
        }
    }
}

/// Header per CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    COLUMNS.to_vec()
}

pub(crate) fn record_to_row(r: &DayRecordExport) -> Vec<String> {
    vec![
        r.date.clone(),
        r.clock_in.clone(),
        r.clock_out.clone(),
        r.hours_worked.clone(),
        r.pay_amount.clone(),
        r.month.clone(),
    ]
}
