use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for trailmark
/// CLI application to track visited national-park landmarks
#[derive(Parser)]
#[command(
    name = "trailmark",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple landmark checklist CLI: track visited points of interest stored as JSON",
    long_about = None
)]
pub struct Cli {
    /// Override the persisted data file path (useful for tests or custom files)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Override the seed resource with a JSON file (useful for tests)
    #[arg(global = true, long = "seed", hide = true)]
    pub seed: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration directory and file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List all locations with their completion state
    List,

    /// Show the detail view of a single location
    Show {
        /// Location id
        id: i32,
    },

    /// Toggle the completion flag of a location and persist the list
    Toggle {
        /// Location id
        id: i32,
    },

    /// Create a backup copy of the persisted data file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export the location list
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
