use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::store::oplog::ttlog;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - an empty record store holding only the header row
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.store.as_deref(), cli.test)?;

    println!("⚙️  Initializing pontolog…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }

    let store = RecordStore::new(cfg.store_path());
    println!("🗄️  Store       : {}", store.path().display());

    if store.init()? {
        success(format!("Record store created at {}", store.path().display()));
        if let Err(e) = ttlog(store.path(), "init", "", "Record store created") {
            warning(format!("Failed to write internal log: {e}"));
        }
    } else {
        // validate the existing file rather than touching it
        let records = store.load()?;
        success(format!(
            "Record store already present ({} records), left untouched",
            records.len()
        ));
    }

    println!("🎉 pontolog initialization completed!");
    Ok(())
}
