//! Groq provider implementation.
//!
//! Talks to Groq's OpenAI-compatible chat-completions endpoint.

use adforge_core::SamplingParams;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::provider::{
    ChatMessage, Completion, CompletionError, CompletionProvider, TokenUsage,
};

/// Groq API endpoint
const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// A generation cannot be cancelled once started, so every request
/// carries a hard transport timeout instead.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Default model
pub const DEFAULT_MODEL: &str = "llama3-70b-8192";

/// Models this provider accepts
const SUPPORTED_MODELS: &[&str] = &[
    "llama3-70b-8192",
    "llama3-8b-8192",
    "llama-3.1-70b-versatile",
    "llama-3.1-8b-instant",
    "mixtral-8x7b-32768",
    "gemma-7b-it",
];

/// Groq API request
#[derive(Debug, Serialize)]
struct GroqRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

/// Groq API response choice message
#[derive(Debug, Deserialize)]
struct GroqChoiceMessage {
    content: Option<String>,
}

/// Groq API response choice
#[derive(Debug, Deserialize)]
struct GroqChoice {
    message: GroqChoiceMessage,
}

/// Groq API usage block
#[derive(Debug, Default, Deserialize)]
struct GroqUsage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
    #[serde(default)]
    total_tokens: u32,
}

/// Groq API response
#[derive(Debug, Deserialize)]
struct GroqResponse {
    choices: Vec<GroqChoice>,
    model: String,
    #[serde(default)]
    usage: Option<GroqUsage>,
}

/// Groq API error payload
#[derive(Debug, Deserialize)]
struct GroqError {
    message: String,
}

/// Groq API error response
#[derive(Debug, Deserialize)]
struct GroqErrorResponse {
    error: GroqError,
}

/// Groq chat-completion provider.
pub struct GroqClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

fn http_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| Client::new())
}

impl GroqClient {
    /// Create a new provider with an API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: http_client(DEFAULT_TIMEOUT),
            api_key: Some(api_key.into()),
            base_url: GROQ_API_URL.to_string(),
        }
    }

    /// Create from the GROQ_API_KEY environment variable.
    pub fn from_env() -> Self {
        Self {
            client: http_client(DEFAULT_TIMEOUT),
            api_key: std::env::var("GROQ_API_KEY").ok(),
            base_url: GROQ_API_URL.to_string(),
        }
    }

    /// Point at a different base URL (proxies, test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Replace the transport timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = http_client(timeout);
        self
    }

    /// Map a non-success HTTP status and body onto a failure kind.
    fn map_failure(status: StatusCode, body: &str) -> CompletionError {
        let detail = serde_json::from_str::<GroqErrorResponse>(body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| format!("{}: {}", status, body));

        if status == StatusCode::TOO_MANY_REQUESTS {
            CompletionError::RateLimited(detail)
        } else if status.is_client_error() {
            CompletionError::Invalid(detail)
        } else {
            CompletionError::Unavailable(detail)
        }
    }
}

#[async_trait]
impl CompletionProvider for GroqClient {
    fn name(&self) -> &'static str {
        "groq"
    }

    fn api_key_env_var(&self) -> &'static str {
        "GROQ_API_KEY"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn supported_models(&self) -> Vec<&str> {
        SUPPORTED_MODELS.to_vec()
    }

    async fn complete(
        &self,
        model: &str,
        messages: &[ChatMessage],
        params: &SamplingParams,
    ) -> Result<Completion, CompletionError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| CompletionError::Invalid("GROQ_API_KEY not set".to_string()))?;

        let request = GroqRequest {
            model,
            messages,
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        };

        let response = self
            .client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionError::Unavailable(format!("request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CompletionError::Unavailable(format!("failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(Self::map_failure(status, &body));
        }

        let api_response: GroqResponse = serde_json::from_str(&body)
            .map_err(|e| CompletionError::Unavailable(format!("failed to parse response: {}", e)))?;

        let text = api_response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default();

        let usage = api_response.usage.unwrap_or_default();

        Ok(Completion {
            text,
            model: api_response.model,
            usage: TokenUsage {
                input_tokens: usage.prompt_tokens,
                output_tokens: usage.completion_tokens,
                total_tokens: usage.total_tokens,
            },
        })
    }
}
