use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::store::RecordStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    // printing is the only action, `--print` is accepted for compatibility
    if matches!(cmd, Commands::Log { .. }) {
        let store = RecordStore::new(cfg.store_path());
        LogLogic::print_log(&store)?;
    }

    Ok(())
}
