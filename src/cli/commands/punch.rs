use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::PayRates;
use crate::core::clock::{ClockLogic, ClockOutcome};
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::punch;
use crate::utils::formatting::{hours_to_hm, money};
use crate::utils::time::{now, parse_timestamp};

/// Register one clock event.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch { at } = cmd {
        let when = match at {
            Some(ts) => parse_timestamp(ts)?,
            None => now(),
        };

        let store = RecordStore::new(cfg.store_path());
        let (outcome, records) = ClockLogic::clock_event(&store, when, &PayRates::from(cfg))?;

        if let Some(rec) = records.last() {
            match outcome {
                ClockOutcome::Opened => {
                    punch(format!("Clock-in registered: {} {}", rec.date_str(), rec.clock_in_str()));
                }
                ClockOutcome::Closed => {
                    let hours = rec.hours_worked.unwrap_or(0.0);
                    punch(format!(
                        "Clock-out registered: {} {} → {:.2} h ({}), {}",
                        rec.date_str(),
                        rec.clock_out_str(),
                        hours,
                        hours_to_hm(hours),
                        money(rec.pay_amount.unwrap_or(0.0), &cfg.currency)
                    ));
                }
            }
        }
    }

    Ok(())
}
