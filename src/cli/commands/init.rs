use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///
/// The persisted data file is deliberately not created: on first run the
/// store falls back to the bundled seed, and the file appears after the
/// first toggle.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Some(custom) = &cli.data {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let cfg = Config::load();

    println!("⚙️  Initializing trailmark…");
    println!("📄 Config file : {}", path.display());
    println!("🗂️  Data file   : {}", &cfg.data_file);
    println!("🎉 trailmark initialization completed!");

    Ok(())
}
