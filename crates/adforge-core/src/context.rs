//! Session Context: explicit per-session state passed to the core functions
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Carries the identity of one user session through a generation.
///
/// The core functions never reach into ambient state; anything
/// session-scoped travels in here.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub session_id: String,
    pub trace_id: String,
    pub started_at: DateTime<Utc>,
    pub metadata: HashMap<String, String>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            trace_id: uuid::Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            metadata: HashMap::new(),
        }
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
