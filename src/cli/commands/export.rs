use crate::cli::commands::resolve_month;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::RecordStore;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        month,
        file,
        force,
    } = cmd
    {
        let store = RecordStore::new(cfg.store_path());
        let month = resolve_month(month.as_deref(), &store.load()?)?;
        let file = file.as_deref().map(expand_tilde);

        ExportLogic::export(
            &store,
            *format,
            month,
            file.as_deref(),
            &cfg.export_path(),
            *force,
        )?;
    }
    Ok(())
}
