use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::logic::ExportLogic;
use crate::store::LocationStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let mut store = LocationStore::from_config(cfg);
        store.load()?;
        ExportLogic::export(&store, format, file, *force)?;
    }
    Ok(())
}
