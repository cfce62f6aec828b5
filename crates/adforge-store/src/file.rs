//! File-backed history: one JSON array, rewritten in full on every append.
//!
//! The wire format is the serde form of [`HistoryEntry`]:
//! `[{"product": "...", "copy": "...", "cta": "...", "image": "..."}]`.
//! There is no version field and no migration path.
//!
//! Single writer only. The internal mutex serializes appends from tasks
//! within one process; nothing protects the file against a second
//! process. Concurrent sessions can lose entries, which is acceptable for
//! a single-user tool and must be fixed (file lock or append-only log)
//! before any multi-session reuse.

use adforge_core::HistoryEntry;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::{HistoryStore, StoreError};

/// JSON-file history log.
#[derive(Debug)]
pub struct JsonFileHistory {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole log. A missing file is an empty log.
    fn load_all(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl HistoryStore for JsonFileHistory {
    fn append(&self, entry: HistoryEntry) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut entries = self.load_all()?;
        entries.push(entry);
        let json = serde_json::to_string_pretty(&entries)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    fn recent(&self, n: usize) -> Result<Vec<HistoryEntry>, StoreError> {
        let entries = self.load_all()?;
        Ok(entries.iter().rev().take(n).cloned().collect())
    }

    fn len(&self) -> Result<usize, StoreError> {
        Ok(self.load_all()?.len())
    }
}
