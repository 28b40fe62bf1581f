use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::store::LocationStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        // The backup copies the on-disk snapshot directly; no load needed.
        let store = LocationStore::from_config(cfg);
        BackupLogic::backup(&store, file, *compress)?;
    }

    Ok(())
}
