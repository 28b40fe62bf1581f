//! trailmark library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::List => cli::commands::list::handle(cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::Toggle { .. } => cli::commands::toggle::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1. parse CLI
    let cli = Cli::parse();

    // 2. load config once
    let mut cfg = Config::load();

    // 3. apply command-line overrides for the data and seed files
    if let Some(custom_data) = &cli.data {
        cfg.data_file = custom_data.clone();
    }
    if let Some(custom_seed) = &cli.seed {
        cfg.seed_file = Some(custom_seed.clone());
    }

    // 4. hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
