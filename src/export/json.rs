use crate::errors::{AppError, AppResult};
use crate::models::location::Location;
use std::fs::File;
use std::io::BufWriter;

/// Write the location list as pretty-printed JSON (same schema as the
/// persisted snapshot).
pub fn write_json(path: &str, locations: &[Location]) -> AppResult<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, locations)
        .map_err(|e| AppError::Export(format!("{}: {}", path, e)))
}
