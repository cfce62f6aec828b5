//! Adforge Client: Completion Provider Boundary
//!
//! The typed boundary between the campaign engine and the hosted model:
//! a provider trait with three failure kinds, a Groq implementation, and
//! the fixed-bound retry wrapper the engine calls through.

pub mod groq;
pub mod provider;
pub mod retry;

pub use groq::{GroqClient, DEFAULT_MODEL};
pub use provider::{
    ChatMessage, Completion, CompletionError, CompletionProvider, Role, TokenUsage,
};
pub use retry::{complete_with_retry, RetryError, RetryPolicy};
