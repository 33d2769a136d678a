//! Persistence for the recently-used list.
//!
//! The on-disk format is a bare JSON array of emoji strings, e.g.
//! `["🔥","🚒"]`, written compactly to `recent-emojis.json` under the
//! data directory resolved by [`crate::app_dirs::get_data_dir`].

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::Result;

/// File name of the recency blob inside the data directory.
pub const RECENT_FILE_NAME: &str = "recent-emojis.json";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to access recent-emoji storage: {0}")]
    Io(#[from] io::Error),
    #[error("recent-emoji storage holds malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Backing store for the recently-used list.
///
/// [`crate::recent::RecentEmojis`] writes through on every mutation and
/// reads once at construction, so implementations can stay dumb: no
/// caching, no merging.
pub trait RecentStore {
    /// Load the stored list, or `None` when nothing was ever saved.
    fn load(&self) -> Result<Option<Vec<String>>, StorageError>;

    /// Replace the stored list with `entries`.
    fn save(&mut self, entries: &[String]) -> Result<(), StorageError>;
}

/// Store backed by a JSON file on disk.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store at the standard location under the platform data directory.
    pub fn open_default() -> Result<Self> {
        let dir = crate::app_dirs::get_data_dir()?;
        Ok(Self::at_dir(&dir))
    }

    /// Store at `recent-emojis.json` inside `dir`.
    #[must_use]
    pub fn at_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(RECENT_FILE_NAME),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecentStore for JsonFileStore {
    fn load(&self) -> Result<Option<Vec<String>>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let entries = serde_json::from_str(&raw)?;
        Ok(Some(entries))
    }

    fn save(&mut self, entries: &[String]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let blob = serde_json::to_string(entries)?;
        fs::write(&self.path, blob)?;
        Ok(())
    }
}

/// In-memory store; clones share one slot. Used by tests and by hosts
/// that do not want picks to outlive the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<Vec<String>>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the stored list, if any.
    #[must_use]
    pub fn stored(&self) -> Option<Vec<String>> {
        self.slot.borrow().clone()
    }
}

impl RecentStore for MemoryStore {
    fn load(&self) -> Result<Option<Vec<String>>, StorageError> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&mut self, entries: &[String]) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(entries.to_vec());
        Ok(())
    }
}
