//! Location store: owns the authoritative in-memory list of locations and
//! mediates every read/write of the persisted snapshot.
//!
//! Precedence rule: the per-user persisted file always wins when it exists
//! (even as an empty array). The bundled seed is consulted only when the
//! persisted file is absent; a corrupt persisted file is an error, not a
//! reason to fall back.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::location::Location;
use crate::utils::path::expand_tilde;

/// Seed resource bundled with the application, used on first run.
pub const SEED_JSON: &str = include_str!("../../assets/locationData.json");

/// Which source populated the list on the last successful `load()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Persisted,
    Seed,
}

/// Result of `toggle_completion`. An unknown id is not an error: the list
/// and the snapshot are untouched and the caller decides whether to warn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Toggled { is_completed: bool },
    NotFound,
}

/// Change notifications emitted to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    ListReplaced { source: LoadSource, count: usize },
    CompletionToggled { id: i32, is_completed: bool },
}

type Listener = Box<dyn Fn(&StoreEvent)>;

pub struct LocationStore {
    locations: Vec<Location>,
    data_file: PathBuf,
    seed_file: Option<PathBuf>,
    listeners: Vec<Listener>,
}

impl LocationStore {
    pub fn new(data_file: PathBuf, seed_file: Option<PathBuf>) -> Self {
        Self {
            locations: Vec::new(),
            data_file,
            seed_file,
            listeners: Vec::new(),
        }
    }

    /// Build a store from the loaded configuration (with `~` expansion).
    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            expand_tilde(&cfg.data_file),
            cfg.seed_file.as_deref().map(expand_tilde),
        )
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Current list, in load order. Read-only snapshot for rendering.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn get(&self, id: i32) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    pub fn completed_count(&self) -> usize {
        self.locations.iter().filter(|l| l.is_completed).count()
    }

    /// Register a change listener. Called synchronously after every
    /// successful list replacement or toggle.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&StoreEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&self, event: &StoreEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }

    /// Populate the in-memory list from exactly one source.
    ///
    /// On any failure the current list is left unchanged (empty, if this is
    /// the first load) and a structured error is returned; the list is never
    /// a partial mix of two sources.
    pub fn load(&mut self) -> AppResult<LoadSource> {
        let (parsed, source) = if self.data_file.exists() {
            (read_locations(&self.data_file)?, LoadSource::Persisted)
        } else {
            let parsed = match &self.seed_file {
                Some(path) => read_locations(path)?,
                None => parse_locations(SEED_JSON, "embedded seed resource")?,
            };
            (parsed, LoadSource::Seed)
        };

        let count = parsed.len();
        self.locations = parsed;
        self.notify(&StoreEvent::ListReplaced { source, count });
        Ok(source)
    }

    /// Write the full in-memory list to the persisted file.
    ///
    /// The snapshot is written to a temp file in the same directory and
    /// renamed over the target, so an interrupted save leaves the previous
    /// snapshot intact. The in-memory list is never modified here.
    pub fn save(&self) -> AppResult<()> {
        if let Some(dir) = self.data_file.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| {
                AppError::StorageUnavailable(format!("{}: {}", dir.display(), e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.locations)
            .map_err(|e| AppError::WriteFailure(format!("{}: {}", self.data_file.display(), e)))?;

        let tmp = self.data_file.with_extension("json.tmp");
        fs::write(&tmp, json)
            .map_err(|e| AppError::WriteFailure(format!("{}: {}", tmp.display(), e)))?;

        fs::rename(&tmp, &self.data_file).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            AppError::WriteFailure(format!("{}: {}", self.data_file.display(), e))
        })
    }

    /// Flip the completion flag of the record with the given id and persist
    /// the updated list immediately. Toggle and persist succeed or fail
    /// together: a failed save rolls the flip back.
    pub fn toggle_completion(&mut self, id: i32) -> AppResult<ToggleOutcome> {
        let is_completed = {
            let Some(loc) = self.locations.iter_mut().find(|l| l.id == id) else {
                return Ok(ToggleOutcome::NotFound);
            };
            loc.is_completed = !loc.is_completed;
            loc.is_completed
        };

        if let Err(e) = self.save() {
            if let Some(loc) = self.locations.iter_mut().find(|l| l.id == id) {
                loc.is_completed = !is_completed;
            }
            return Err(e);
        }

        self.notify(&StoreEvent::CompletionToggled { id, is_completed });
        Ok(ToggleOutcome::Toggled { is_completed })
    }
}

fn read_locations(path: &Path) -> AppResult<Vec<Location>> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::ReadFailure(format!("{}: {}", path.display(), e)))?;
    parse_locations(&content, &path.display().to_string())
}

fn parse_locations(json: &str, what: &str) -> AppResult<Vec<Location>> {
    serde_json::from_str(json).map_err(|e| AppError::DecodeFailure(format!("{}: {}", what, e)))
}
