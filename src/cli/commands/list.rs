use crate::cli::commands::resolve_month;
use crate::cli::commands::totals::print_totals;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::sum_month;
use crate::core::report::filter_month;
use crate::errors::AppResult;
use crate::models::DayRecord;
use crate::store::RecordStore;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{colorize_in_out, colorize_optional, warn_color};
use crate::utils::date::{describe_month, today};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_amount;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { month } = cmd {
        let store = RecordStore::new(cfg.store_path());
        let records = store.load()?;
        let month = resolve_month(month.as_deref(), &records)?;

        let totals = sum_month(&records, month);
        let rows = filter_month(records, month);

        header(format!("Records for {}:", describe_month(month)));

        if rows.is_empty() {
            println!("No records for {month}.\n");
        } else {
            print!("{}", build_table(&rows, &cfg.currency).render());
            println!();
        }

        print_totals(&totals, &cfg.currency);

        let stale = rows.iter().filter(|r| is_stale(r)).count();
        if stale > 0 {
            warning(format!(
                "{stale} record(s) from a previous day were never clocked out"
            ));
        }
    }
    Ok(())
}

/// Open record from a day before today.
fn is_stale(r: &DayRecord) -> bool {
    r.is_open() && r.date < today()
}

fn build_table(rows: &[DayRecord], currency: &str) -> Table {
    let mut table = Table::new(vec![
        Column::left("Data"),
        Column::left("Entrada"),
        Column::left("Saída"),
        Column::right("Horas"),
        Column::right(&format!("Valor ({currency})")),
    ]);

    for r in rows {
        let out = if r.clock_out.is_some() {
            colorize_in_out(&r.clock_out_str(), false)
        } else if is_stale(r) {
            warn_color("open")
        } else {
            colorize_optional("--:--")
        };

        let clock_in = match r.clock_in {
            Some(_) => colorize_in_out(&r.clock_in_str(), true),
            None => colorize_optional("--:--"),
        };

        table.add_row(vec![
            r.date_str(),
            clock_in,
            out,
            colorize_optional(&format_amount(r.hours_worked)),
            colorize_optional(&format_amount(r.pay_amount)),
        ]);
    }

    table
}
