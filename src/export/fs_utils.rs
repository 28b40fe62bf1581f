use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::Path;

/// Check whether a file may be created or overwritten.
///
/// - If the file does not exist → Ok
/// - If it exists and `force` is set → Ok
/// - If it exists and `force == false` → ask the user for confirmation.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));
    print!("Overwrite it? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();

    if answer == "y" || answer == "yes" {
        Ok(())
    } else {
        info("Operation cancelled by user.");
        Err(io::Error::new(io::ErrorKind::AlreadyExists, "file exists").into())
    }
}
