//! Adforge Prompt: Campaign Brief to Prompt Renderer
//!
//! This crate provides the rendering layer that converts a structured
//! campaign brief into the natural-language prompt sent to the
//! completion provider.
//!
//! # Example
//!
//! ```ignore
//! use adforge_prompt::{build_prompt, PromptRequest};
//! use adforge_core::{ArtifactKind, CampaignBrief, Platform, Tone};
//!
//! let request = PromptRequest {
//!     brief: CampaignBrief {
//!         niche: "Fitness".into(),
//!         platform: Platform::Instagram,
//!         tone: Tone::Aggressive,
//!         product: "ShredPro".into(),
//!         pain_point: "low energy".into(),
//!         benefits: "more energy, faster results".into(),
//!         link: "https://example.com/x".into(),
//!     },
//!     kind: ArtifactKind::MultiPost,
//!     templates_path: None,
//! };
//!
//! let result = build_prompt(request).unwrap();
//! println!("{}", result.prompt);
//! ```

pub mod builder;
pub mod templates;

pub use builder::PromptBuilder;
pub use templates::{Template, TemplatesFile};

use adforge_core::{ArtifactKind, CampaignBrief};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request to build a prompt from a brief
#[derive(Debug, Clone, Deserialize)]
pub struct PromptRequest {
    /// The campaign brief to substitute into the template
    pub brief: CampaignBrief,
    /// Which artifact the prompt should ask for
    pub kind: ArtifactKind,
    /// Path to a templates file (optional, uses the builtin set if not provided)
    pub templates_path: Option<String>,
}

/// Result of a prompt build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptResult {
    /// The rendered prompt
    pub prompt: String,
    /// Template that was used
    pub template_used: String,
}

/// Errors that can occur while building a prompt
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Template load failed: {0}")]
    Template(String),
    #[error("Render failed: {0}")]
    Render(String),
}

/// Default templates path relative to the workspace root
pub const DEFAULT_TEMPLATES_PATH: &str = "templates/ad-templates.yaml";

/// Build the prompt for one artifact kind from a campaign brief
pub fn build_prompt(request: PromptRequest) -> Result<PromptResult, PromptError> {
    let builder = match request.templates_path.as_deref() {
        Some(path) => PromptBuilder::load(path).map_err(PromptError::Template)?,
        None => PromptBuilder::builtin(),
    };

    let prompt = builder
        .render_brief(request.kind, &request.brief)
        .map_err(PromptError::Render)?;

    Ok(PromptResult {
        prompt,
        template_used: request.kind.template_name().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use adforge_core::{Platform, Tone};

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

    #[test]
    fn test_ad_copy_prompt_contains_brief_fields_verbatim() {
        let result = build_prompt(PromptRequest {
            brief: brief(),
            kind: ArtifactKind::AdCopy,
            templates_path: None,
        })
        .unwrap();

        assert!(!result.prompt.is_empty());
        for needle in ["ShredPro", "Instagram", "Aggressive", "https://example.com/x"] {
            assert!(result.prompt.contains(needle), "missing {}", needle);
        }
        assert_eq!(result.template_used, "ad_copy");
    }

    #[test]
    fn test_benefits_render_as_bullet_list() {
        let result = build_prompt(PromptRequest {
            brief: brief(),
            kind: ArtifactKind::AdCopy,
            templates_path: None,
        })
        .unwrap();

        assert!(result.prompt.contains("- more energy"));
        assert!(result.prompt.contains("- faster results"));
    }

    #[test]
    fn test_multi_post_prompt_declares_markers() {
        let result = build_prompt(PromptRequest {
            brief: brief(),
            kind: ArtifactKind::MultiPost,
            templates_path: None,
        })
        .unwrap();

        for marker in ["---COPY---", "---CTA---", "---IMAGE---"] {
            assert!(result.prompt.contains(marker), "missing {}", marker);
        }
    }

    #[test]
    fn test_template_like_field_values_pass_through_verbatim() {
        let mut odd = brief();
        odd.product = "{{product}} & <Friends>".to_string();
        let result = build_prompt(PromptRequest {
            brief: odd,
            kind: ArtifactKind::ImagePrompt,
            templates_path: None,
        })
        .unwrap();

        assert!(result.prompt.contains("{{product}} & <Friends>"));
    }

    #[test]
    fn test_empty_fields_flow_through() {
        let mut empty = brief();
        empty.niche.clear();
        empty.pain_point.clear();
        let result = build_prompt(PromptRequest {
            brief: empty,
            kind: ArtifactKind::AdCopy,
            templates_path: None,
        });
        assert!(result.is_ok());
    }

    #[test]
    fn test_missing_templates_file_is_reported() {
        let result = build_prompt(PromptRequest {
            brief: brief(),
            kind: ArtifactKind::AdCopy,
            templates_path: Some("no/such/file.yaml".to_string()),
        });
        assert!(matches!(result, Err(PromptError::Template(_))));
    }
}
