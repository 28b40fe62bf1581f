use crate::models::location::Location;
use csv::Writer;

/// Write the location list as CSV, one row per record, all fields.
pub fn write_csv(path: &str, locations: &[Location]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "name",
        "category",
        "city",
        "state",
        "park",
        "description",
        "imageName",
        "isCompleted",
    ])?;

    for loc in locations {
        wtr.write_record(&[
            loc.id.to_string(),
            loc.name.clone(),
            loc.category.clone(),
            loc.city.clone(),
            loc.state.clone(),
            loc.park.clone(),
            loc.description.clone(),
            loc.image_name.clone(),
            loc.is_completed.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
