//! Environment-driven configuration.
//!
//! All knobs come from the environment, read once at startup. A missing
//! completion credential is fatal before the server ever binds.

use adforge_client::DEFAULT_MODEL;
use thiserror::Error;

/// Default listen address
const DEFAULT_ADDR: &str = "0.0.0.0:8787";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GROQ_API_KEY not set; refusing to start without a completion credential")]
    MissingApiKey,
}

/// Typed view of the process environment.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Listen address (ADFORGE_ADDR)
    pub addr: String,
    /// Completion credential (GROQ_API_KEY, required)
    pub groq_api_key: String,
    /// Model identifier (ADFORGE_MODEL)
    pub model: String,
    /// History file path (ADFORGE_HISTORY); unset means in-memory history
    pub history_path: Option<String>,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let groq_api_key = std::env::var("GROQ_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            addr: std::env::var("ADFORGE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string()),
            model: std::env::var("ADFORGE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            history_path: std::env::var("ADFORGE_HISTORY").ok(),
            groq_api_key,
        })
    }
}
