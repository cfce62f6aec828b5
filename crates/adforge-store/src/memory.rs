//! Process-lifetime history: cleared when the process exits.

use adforge_core::HistoryEntry;
use std::sync::Mutex;

use crate::{HistoryStore, StoreError};

/// In-memory history log.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    entries: Mutex<Vec<HistoryEntry>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, Vec<HistoryEntry>> {
        // Recover from poisoning: the log is append-only, a panicked
        // writer cannot leave a half-written entry behind.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl HistoryStore for MemoryHistory {
    fn append(&self, entry: HistoryEntry) -> Result<(), StoreError> {
        self.entries().push(entry);
        Ok(())
    }

    fn recent(&self, n: usize) -> Result<Vec<HistoryEntry>, StoreError> {
        let entries = self.entries();
        Ok(entries.iter().rev().take(n).cloned().collect())
    }

    fn len(&self) -> Result<usize, StoreError> {
        Ok(self.entries().len())
    }
}
