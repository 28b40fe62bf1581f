use std::path::Path;

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::{ExportFormat, csv, json};
use crate::store::LocationStore;
use crate::ui::messages;
use crate::utils::path::is_absolute;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the current location list.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    /// - `force`: overwrite an existing file without asking
    pub fn export(
        store: &LocationStore,
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        if !is_absolute(file) {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let path = Path::new(file);
        ensure_writable(path, force)?;

        let locations = store.locations();
        if locations.is_empty() {
            messages::warning("No locations loaded. Nothing to export.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => csv::write_csv(file, locations)?,
            ExportFormat::Json => json::write_json(file, locations)?,
        }

        messages::success(format!(
            "Exported {} locations to {} ({})",
            locations.len(),
            file,
            format.as_str()
        ));
        Ok(())
    }
}
