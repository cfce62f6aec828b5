//! Completion provider boundary.
//!
//! Defines the interface the engine consumes. Transport and timeout
//! details belong to the implementation behind it; the failure kinds here
//! are the whole contract the caller sees.

use adforge_core::SamplingParams;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A message in a conversation with the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    /// Create a new system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create a new assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Token usage reported by the provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub total_tokens: u32,
}

/// One completion from the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Completion {
    /// Generated text
    pub text: String,
    /// Model that produced it
    pub model: String,
    pub usage: TokenUsage,
}

/// The failure kinds a provider can surface.
#[derive(Debug, Clone, Error)]
pub enum CompletionError {
    /// Transport failure or provider outage; worth retrying
    #[error("provider unavailable: {0}")]
    Unavailable(String),
    /// The provider throttled the call
    #[error("rate limited: {0}")]
    RateLimited(String),
    /// The provider rejected the request itself
    #[error("invalid request: {0}")]
    Invalid(String),
}

/// Trait for completion providers.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Provider name (e.g. "groq").
    fn name(&self) -> &'static str;

    /// Environment variable holding the API key.
    fn api_key_env_var(&self) -> &'static str;

    /// Whether an API key is present.
    fn is_configured(&self) -> bool;

    /// Models this provider accepts.
    fn supported_models(&self) -> Vec<&str>;

    fn supports_model(&self, model: &str) -> bool {
        self.supported_models().contains(&model)
    }

    /// Request one completion for the given messages.
    async fn complete(
        &self,
        model: &str,
        messages: &[ChatMessage],
        params: &SamplingParams,
    ) -> Result<Completion, CompletionError>;
}
