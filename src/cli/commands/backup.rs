use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::store::RecordStore;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let store = RecordStore::new(cfg.store_path());
        let dest = expand_tilde(file);
        BackupLogic::check_destination(&dest, *compress)?;

        ensure_writable(&dest, *force)?;
        if *compress {
            ensure_writable(&dest.with_extension("zip"), *force)?;
        }

        BackupLogic::backup(&store, &dest, *compress)?;
    }

    Ok(())
}
