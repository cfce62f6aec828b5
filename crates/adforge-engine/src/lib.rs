//! Adforge Engine: the generation pipeline.
//!
//! Composes the sibling crates into the single flow the surface layer
//! calls:
//!
//! ```text
//! CampaignBrief → PromptBuilder → CompletionProvider (retried) → sections → history
//! ```
//!
//! Each hop keeps its own typed error; the engine maps them into
//! [`EngineError`] and decides which failures the caller must see. A
//! history-append failure after a successful generation is logged and
//! swallowed: the copy was produced and the caller gets it.

use std::sync::Arc;

use adforge_client::{
    complete_with_retry, ChatMessage, CompletionProvider, RetryError, RetryPolicy, DEFAULT_MODEL,
};
use adforge_core::{
    ArtifactKind, CampaignBrief, CampaignResult, GenerationRequest, HistoryEntry, SamplingParams,
    SessionContext,
};
use adforge_parse::CampaignSections;
use adforge_prompt::{PromptBuilder, PromptError};
use adforge_store::HistoryStore;
use thiserror::Error;

/// Errors the generation pipeline surfaces to its caller.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("prompt: {0}")]
    Prompt(#[from] PromptError),
    #[error("generation: {0}")]
    Completion(#[from] RetryError),
}

/// The campaign generation pipeline.
pub struct CampaignEngine {
    provider: Arc<dyn CompletionProvider>,
    history: Arc<dyn HistoryStore>,
    builder: PromptBuilder,
    retry: RetryPolicy,
    model: String,
    sampling: SamplingParams,
}

impl CampaignEngine {
    /// Engine over the builtin templates with default model, sampling and
    /// retry policy.
    pub fn new(provider: Arc<dyn CompletionProvider>, history: Arc<dyn HistoryStore>) -> Self {
        Self {
            provider,
            history,
            builder: PromptBuilder::builtin(),
            retry: RetryPolicy::default(),
            model: DEFAULT_MODEL.to_string(),
            sampling: SamplingParams::default(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_sampling(mut self, sampling: SamplingParams) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn with_builder(mut self, builder: PromptBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// Fill a request with the engine's defaults.
    pub fn request(&self, brief: CampaignBrief, kind: ArtifactKind) -> GenerationRequest {
        GenerationRequest {
            brief,
            kind,
            model: self.model.clone(),
            sampling: self.sampling,
        }
    }

    /// Generate with the engine's default model and sampling.
    pub async fn generate(
        &self,
        brief: CampaignBrief,
        kind: ArtifactKind,
        ctx: &SessionContext,
    ) -> Result<CampaignResult, EngineError> {
        let request = self.request(brief, kind);
        self.run(&request, ctx).await
    }

    /// Run one generation request through the full pipeline.
    pub async fn run(
        &self,
        request: &GenerationRequest,
        ctx: &SessionContext,
    ) -> Result<CampaignResult, EngineError> {
        let prompt = self
            .builder
            .render_brief(request.kind, &request.brief)
            .map_err(|e| EngineError::Prompt(PromptError::Render(e)))?;

        tracing::debug!(
            trace_id = %ctx.trace_id,
            kind = ?request.kind,
            prompt_chars = prompt.len(),
            "prompt built"
        );

        let messages = [ChatMessage::user(prompt)];
        let completion = complete_with_retry(
            self.provider.as_ref(),
            &request.model,
            &messages,
            &request.sampling,
            &self.retry,
        )
        .await?;

        let result = sectioned_result(request.kind, completion.text);

        let entry = HistoryEntry {
            product: request.brief.product.clone(),
            ad_copy: result.ad_copy.clone(),
            cta: result.call_to_action.clone(),
            image_prompt: result.image_prompt.clone(),
        };
        if let Err(e) = self.history.append(entry) {
            tracing::warn!(trace_id = %ctx.trace_id, error = %e, "history append failed");
        }

        tracing::info!(
            trace_id = %ctx.trace_id,
            model = %request.model,
            kind = ?request.kind,
            "campaign generated"
        );
        Ok(result)
    }

    /// The history log this engine appends to.
    pub fn history(&self) -> &Arc<dyn HistoryStore> {
        &self.history
    }
}

/// Classify one completion into the result fields for its artifact kind.
fn sectioned_result(kind: ArtifactKind, raw: String) -> CampaignResult {
    match kind {
        ArtifactKind::MultiPost => {
            let sections = CampaignSections::from_completion(&raw);
            CampaignResult {
                raw,
                ad_copy: sections.ad_copy,
                call_to_action: sections.call_to_action,
                image_prompt: sections.image_prompt,
            }
        }
        ArtifactKind::AdCopy => CampaignResult {
            ad_copy: raw.trim().to_string(),
            raw,
            ..Default::default()
        },
        ArtifactKind::ImagePrompt => CampaignResult {
            image_prompt: raw.trim().to_string(),
            raw,
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adforge_client::{Completion, CompletionError};
    use adforge_core::{Platform, Tone};
    use adforge_store::MemoryHistory;
    use async_trait::async_trait;
    use std::time::Duration;

    struct CannedProvider {
        reply: Option<String>,
    }

    #[async_trait]
    impl CompletionProvider for CannedProvider {
        fn name(&self) -> &'static str {
            "canned"
        }

        fn api_key_env_var(&self) -> &'static str {
            "CANNED_API_KEY"
        }

        fn is_configured(&self) -> bool {
            true
        }

        fn supported_models(&self) -> Vec<&str> {
            vec!["llama3-70b-8192"]
        }

        async fn complete(
            &self,
            model: &str,
            _messages: &[ChatMessage],
            _params: &SamplingParams,
        ) -> Result<Completion, CompletionError> {
            match &self.reply {
                Some(text) => Ok(Completion {
                    text: text.clone(),
                    model: model.to_string(),
                    usage: Default::default(),
                }),
                None => Err(CompletionError::Unavailable("down".to_string())),
            }
        }
    }

    fn brief() -> CampaignBrief {
        CampaignBrief {
            niche: "Fitness".to_string(),
            platform: Platform::Instagram,
            tone: Tone::Aggressive,
            product: "ShredPro".to_string(),
            pain_point: "low energy".to_string(),
            benefits: "more energy, faster results".to_string(),
            link: "https://example.com/x".to_string(),
        }
    }

    fn engine(reply: Option<&str>) -> CampaignEngine {
        let provider = Arc::new(CannedProvider {
            reply: reply.map(str::to_string),
        });
        let history = Arc::new(MemoryHistory::new());
        CampaignEngine::new(provider, history).with_retry(RetryPolicy {
            max_attempts: 3,
            delay: Duration::ZERO,
        })
    }

    #[tokio::test]
    async fn test_multi_post_flow_fills_all_fields_and_history() {
        let reply = "---COPY---\nBig headline\n---CTA---\nBuy now\n---IMAGE---\nGym at dawn";
        let engine = engine(Some(reply));
        let ctx = SessionContext::new();

        let result = engine
            .generate(brief(), ArtifactKind::MultiPost, &ctx)
            .await
            .unwrap();

        assert_eq!(result.ad_copy, "Big headline");
        assert_eq!(result.call_to_action, "Buy now");
        assert_eq!(result.image_prompt, "Gym at dawn");
        assert_eq!(result.raw, reply);

        let recent = engine.history().recent(1).unwrap();
        assert_eq!(recent[0].product, "ShredPro");
        assert_eq!(recent[0].cta, "Buy now");
    }

    #[tokio::test]
    async fn test_ad_copy_kind_uses_whole_completion() {
        let engine = engine(Some("  One block of copy.  "));
        let ctx = SessionContext::new();

        let result = engine
            .generate(brief(), ArtifactKind::AdCopy, &ctx)
            .await
            .unwrap();

        assert_eq!(result.ad_copy, "One block of copy.");
        assert_eq!(result.call_to_action, "");
        assert_eq!(result.image_prompt, "");
    }

    #[tokio::test]
    async fn test_failed_generation_surfaces_and_skips_history() {
        let engine = engine(None);
        let ctx = SessionContext::new();

        let result = engine.generate(brief(), ArtifactKind::MultiPost, &ctx).await;

        assert!(matches!(result, Err(EngineError::Completion(_))));
        assert!(engine.history().is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_marker_free_reply_degrades_to_primary_copy() {
        let engine = engine(Some("No markers here, just copy."));
        let ctx = SessionContext::new();

        let result = engine
            .generate(brief(), ArtifactKind::MultiPost, &ctx)
            .await
            .unwrap();

        assert_eq!(result.ad_copy, "No markers here, just copy.");
        assert_eq!(result.call_to_action, "");
    }
}
