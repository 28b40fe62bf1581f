use crate::config::Config;
use crate::errors::AppResult;
use crate::store::LocationStore;
use crate::ui::messages;
use crate::utils::table::{Column, Table};

/// Handle the `list` command: render the full location list as a table.
///
/// A failed load is reported as a warning and renders an empty list; the
/// list view never aborts on storage problems.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut store = LocationStore::from_config(cfg);

    if let Err(e) = store.load() {
        messages::warning(format!("Could not load location data: {}", e));
    }

    if store.locations().is_empty() {
        println!("No locations available.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("ID", 4),
        Column::new("", 2),
        Column::new("NAME", 28),
        Column::new("PARK", 34),
        Column::new("STATE", 12),
        Column::new("CATEGORY", 16),
    ]);

    for loc in store.locations() {
        table.add_row(vec![
            loc.id.to_string(),
            loc.marker().to_string(),
            loc.name.clone(),
            loc.park.clone(),
            loc.state.clone(),
            loc.category.clone(),
        ]);
    }

    print!("{}", table.render());
    println!(
        "\n{} of {} locations visited",
        store.completed_count(),
        store.locations().len()
    );

    Ok(())
}
