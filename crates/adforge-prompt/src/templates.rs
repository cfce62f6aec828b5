//! Template loading and management for the prompt builder.
//!
//! Prompt templates live in a versioned YAML file with:
//! - Multiple named templates
//! - Handlebars syntax
//! - Custom helpers registered by the builder
//!
//! A builtin set is embedded so callers need nothing on disk.

use lazy_static::lazy_static;
use serde::Deserialize;
use std::collections::HashMap;

/// Top-level templates file structure
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesFile {
    pub version: String,
    pub templates: HashMap<String, Template>,
}

/// A single template definition
#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    pub description: String,
    pub template: String,
    #[serde(default)]
    pub example: Option<serde_json::Value>,
}

impl TemplatesFile {
    /// Parse a templates file from YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| format!("Invalid templates file: {}", e))
    }

    /// Load a templates file from disk
    pub fn load(path: &str) -> Result<Self, String> {
        let yaml = std::fs::read_to_string(path).map_err(|e| format!("Cannot read {}: {}", path, e))?;
        Self::from_yaml(&yaml)
    }

    /// The embedded default template set
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Sorted template names
    pub fn list_templates(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

lazy_static! {
    static ref BUILTIN: TemplatesFile =
        TemplatesFile::from_yaml(BUILTIN_TEMPLATES).expect("builtin templates parse");
}

/// Embedded copy of `templates/ad-templates.yaml`. Keep the two in sync.
const BUILTIN_TEMPLATES: &str = r#"
version: "1.0"

templates:
  ad_copy:
    description: Single high-converting ad copy with a fixed structure
    template: |
      You are a senior digital marketing expert.

      Create a HIGH-CONVERTING ad copy with the following structure:

      1. BIG BOLD HEADLINE (short & powerful)
      2. Emotional hook (2-3 lines)
      3. Pain agitation
      4. Bullet list of benefits
      5. Strong CTA

      Target Platform: {{platform}}
      Niche: {{niche}}
      Tone: {{tone}}
      Product: {{product}}
      Customer Pain Point: {{pain_point}}
      Main Benefits:
      {{bullets benefits}}
      Affiliate Link: {{link}}

      Make it persuasive, emotional and conversion-focused.

  image_prompt:
    description: Image generation prompt for the campaign visual
    template: |
      You are a visual art director for paid social campaigns.

      Write one detailed image generation prompt for a {{platform}} creative
      promoting {{product}} in the {{niche}} niche. The mood must be {{tone}}.
      Describe the scene, lighting, composition and color palette in a single
      paragraph. Do not include text overlays or watermarks.

  multi_post:
    description: Copy, CTA and image prompt in one answer, split by literal markers
    template: |
      You are a senior digital marketing expert.

      Produce a complete {{platform}} campaign for the product below. Answer
      with exactly three sections, each introduced by its literal marker on
      its own line, in this order:

      ---COPY---
      The full ad copy: headline, emotional hook, pain agitation, benefit
      list and closing line. Tone: {{tone}}.

      ---CTA---
      Three short call-to-action lines pointing readers to {{link}}.

      ---IMAGE---
      One detailed image generation prompt for the campaign visual.

      Niche: {{niche}}
      Product: {{product}}
      Customer Pain Point: {{pain_point}}
      Main Benefits:
      {{bullets benefits}}
      Affiliate Link: {{link}}
"#;
