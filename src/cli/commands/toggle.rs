use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{LocationStore, ToggleOutcome};
use crate::ui::messages;

/// Handle the `toggle` command: flip a location's completion flag and
/// persist the full list before returning.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Toggle { id } = cmd {
        let mut store = LocationStore::from_config(cfg);

        // Unlike the list view, a toggle that cannot see the current data
        // must not proceed: it would persist an empty list.
        store.load()?;

        let name = store.get(*id).map(|l| l.name.clone());

        match store.toggle_completion(*id)? {
            ToggleOutcome::Toggled { is_completed } => {
                let name = name.unwrap_or_else(|| format!("#{}", id));
                if is_completed {
                    messages::success(format!("Marked '{}' as visited", name));
                } else {
                    messages::info(format!("Marked '{}' as not visited", name));
                }
            }
            ToggleOutcome::NotFound => {
                messages::warning(format!("No location with id {}. Nothing to do.", id));
            }
        }
    }
    Ok(())
}
