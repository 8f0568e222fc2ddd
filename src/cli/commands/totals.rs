use crate::cli::commands::resolve_month;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::sum_month;
use crate::errors::AppResult;
use crate::models::MonthTotals;
use crate::store::RecordStore;
use crate::ui::messages::metric;
use crate::utils::formatting::{hours_readable, money};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Totals { month } = cmd {
        let store = RecordStore::new(cfg.store_path());
        let records = store.load()?;
        let month = resolve_month(month.as_deref(), &records)?;

        print_totals(&sum_month(&records, month), &cfg.currency);
    }
    Ok(())
}

pub(crate) fn print_totals(totals: &MonthTotals, currency: &str) {
    metric("Month:", totals.month, 13);
    metric("Total hours:", hours_readable(totals.total_hours), 13);
    metric("Total pay:", money(totals.total_pay, currency), 13);
}
