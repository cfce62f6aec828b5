//! Adforge Store: Append-Only Campaign History
//!
//! An ordered, append-only log of completed generations. Entries are
//! created once, never mutated and never deleted within a session.
//! Two variants: process-lifetime memory and a JSON file rewritten on
//! every append.

pub mod file;
pub mod memory;

pub use file::JsonFileHistory;
pub use memory::MemoryHistory;

use adforge_core::HistoryEntry;
use thiserror::Error;

/// Errors surfaced by the history stores
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("history io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("history file is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Append-only history log. No update, no delete.
pub trait HistoryStore: Send + Sync {
    /// Add an entry at the end of the log.
    fn append(&self, entry: HistoryEntry) -> Result<(), StoreError>;

    /// The last `n` entries, most recent first.
    fn recent(&self, n: usize) -> Result<Vec<HistoryEntry>, StoreError>;

    /// Total number of entries in the log.
    fn len(&self) -> Result<usize, StoreError>;

    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}
