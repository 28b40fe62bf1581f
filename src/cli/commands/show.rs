use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::LocationStore;
use crate::ui::messages;
use crate::utils::colors::colorize_marker;
use crate::utils::formatting::{bold, italic};

/// Handle the `show` command: detail view of a single location.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let mut store = LocationStore::from_config(cfg);

        if let Err(e) = store.load() {
            messages::warning(format!("Could not load location data: {}", e));
        }

        let Some(loc) = store.get(*id) else {
            messages::warning(format!("No location with id {}.", id));
            return Ok(());
        };

        messages::header(bold(&loc.name));
        println!("{} — {}", loc.category, loc.park);
        println!("{}", loc.place());
        println!(
            "Status: {} {}",
            colorize_marker(loc.marker(), loc.is_completed),
            if loc.is_completed { "visited" } else { "not yet visited" }
        );
        println!();
        println!("{}", textwrap::fill(&loc.description, 72));

        if cfg.show_images {
            println!();
            println!("{}", italic(&format!("Image: {}", loc.image_name)));
        }
    }
    Ok(())
}
