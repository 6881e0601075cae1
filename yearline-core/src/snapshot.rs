//! Snapshot persistence for events and categories.
//!
//! State lives in two independent JSON blobs under the data directory:
//! `events.json` and `categories.json`. A missing blob means "no data
//! yet", not an error. Writes land in a temp file first and are renamed
//! into place so a crash never leaves a half-written snapshot.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::category::Category;
use crate::error::{YearlineError, YearlineResult};
use crate::event::Event;

const EVENTS_FILE: &str = "events.json";
const CATEGORIES_FILE: &str = "categories.json";

/// Reads and writes the snapshot blobs in one data directory.
#[derive(Debug, Clone)]
pub struct Storage {
    data_dir: PathBuf,
}

impl Storage {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Storage {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load the event snapshot. `None` when no snapshot exists yet.
    pub fn load_events(&self) -> YearlineResult<Option<Vec<Event>>> {
        self.read_blob(EVENTS_FILE)
    }

    pub fn save_events(&self, events: &[Event]) -> YearlineResult<()> {
        self.write_blob(EVENTS_FILE, &events)
    }

    /// Load the category snapshot. `None` when no snapshot exists yet.
    pub fn load_categories(&self) -> YearlineResult<Option<Vec<Category>>> {
        self.read_blob(CATEGORIES_FILE)
    }

    pub fn save_categories(&self, categories: &[Category]) -> YearlineResult<()> {
        self.write_blob(CATEGORIES_FILE, &categories)
    }

    fn read_blob<T: DeserializeOwned>(&self, name: &str) -> YearlineResult<Option<T>> {
        let path = self.data_dir.join(name);

        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)?;
        let value = serde_json::from_str(&content).map_err(|e| {
            YearlineError::Serialization(format!("{}: {}", path.display(), e))
        })?;

        Ok(Some(value))
    }

    fn write_blob<T: Serialize>(&self, name: &str, value: &T) -> YearlineResult<()> {
        std::fs::create_dir_all(&self.data_dir)?;

        let path = self.data_dir.join(name);
        let temp = self.data_dir.join(format!("{name}.tmp"));

        let content = serde_json::to_string_pretty(value)
            .map_err(|e| YearlineError::Serialization(e.to_string()))?;

        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }
}
