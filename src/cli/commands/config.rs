use crate::config::Config;
use crate::errors::AppResult;

use crate::cli::parser::Commands;
use std::path::Path;
use std::process::Command;

/// Launch `editor` on `path`, true when it exited successfully.
fn run_editor(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}

/// Platform default editor: $EDITOR/$VISUAL, else nano (notepad on Windows).
fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            match serde_yaml::to_string(&cfg) {
                Ok(yaml) => println!("{}", yaml),
                Err(e) => eprintln!("❌ Failed to render configuration: {}", e),
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let fallback = default_editor();
            let chosen = editor.clone().unwrap_or_else(|| fallback.clone());

            if run_editor(&chosen, &path) {
                println!("✅ Configuration file edited successfully using '{}'", chosen);
            } else if chosen != fallback {
                eprintln!(
                    "⚠️  Editor '{}' not available, falling back to '{}'",
                    chosen, fallback
                );
                if run_editor(&fallback, &path) {
                    println!(
                        "✅ Configuration file edited successfully using fallback '{}'",
                        fallback
                    );
                } else {
                    eprintln!(
                        "❌ Failed to edit configuration file using fallback '{}'",
                        fallback
                    );
                }
            } else {
                eprintln!("❌ Failed to edit configuration file using '{}'", chosen);
            }
        }
    }

    Ok(())
}
