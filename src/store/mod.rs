//! Persistent stores for appraisal history and custom materials
//!
//! Both stores keep in-memory state authoritative: reads tolerate missing or
//! corrupt files, and a failed write leaves the session running on memory.

pub mod materials;

pub use materials::MaterialStore;

use crate::error::Result;
use crate::types::HistoryEntry;
use std::fs;
use std::path::PathBuf;

/// History list cap; oldest entries are evicted beyond it
pub const MAX_HISTORY_ENTRIES: usize = 500;

/// Persistent, newest-first list of saved appraisals
pub struct HistoryStore {
    store_path: PathBuf,
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Create or load a store under `store_dir`.
    ///
    /// A missing or corrupt file starts an empty history.
    pub fn open(store_dir: PathBuf) -> Self {
        let _ = fs::create_dir_all(&store_dir);
        let store_path = store_dir.join("history.json");
        let entries = fs::read_to_string(&store_path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();
        Self { store_path, entries }
    }

    fn persist(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.store_path, content)?;
        Ok(())
    }

    /// Prepend an entry, evicting the oldest beyond the cap.
    ///
    /// The write happens synchronously; a failure is swallowed and the
    /// in-memory list stays current.
    pub fn add(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_HISTORY_ENTRIES);
        let _ = self.persist();
    }

    /// All entries, newest first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }
}
