use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::store::LocationStore;
use crate::ui::messages;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the persisted snapshot to `dest_file`, optionally gzipping it.
    pub fn backup(store: &LocationStore, dest_file: &str, compress: bool) -> AppResult<()> {
        let src = store.data_file();
        let dest = Path::new(dest_file);

        // 1. Check the snapshot exists
        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Location data file not found: {}", src.display()),
            )
            .into());
        }

        // 2. Ensure destination folder exists
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        // 2.5. If destination file exists, ask confirmation
        ensure_writable(dest, false)?;

        // 3. Copy the snapshot
        fs::copy(src, dest)?;
        messages::success(format!("Backup created: {}", dest.display()));

        // 4. Optional compression
        if compress {
            let compressed = compress_backup(dest)?;

            if compressed != dest.to_path_buf() {
                if let Err(e) = fs::remove_file(dest) {
                    messages::warning(format!("Failed to remove uncompressed backup: {}", e));
                } else {
                    messages::info(format!(
                        "Removed uncompressed backup: {}",
                        dest.display()
                    ));
                }
                messages::success(format!("Compressed backup: {}", compressed.display()));
            }
        }

        Ok(())
    }
}

/// Gzip `path` into `<path>.gz` and return the compressed path.
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let gz_path = PathBuf::from(format!("{}.gz", path.display()));

    let mut input = fs::File::open(path)?;
    let output = fs::File::create(&gz_path)?;
    let mut encoder = GzEncoder::new(output, Compression::default());
    io::copy(&mut input, &mut encoder)?;
    encoder.finish()?;

    Ok(gz_path)
}
