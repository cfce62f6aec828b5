//! Prompt rendering for campaign briefs.
//!
//! Uses Handlebars with custom helpers:
//! - bullets: render a comma separated field as a dash-prefixed list
//! - truncate: clamp a string to a max number of characters

use adforge_core::{ArtifactKind, CampaignBrief};
use handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext,
};
use serde_json::Value;

use crate::templates::TemplatesFile;

/// Compiled builder with registered helpers and templates
pub struct PromptBuilder {
    handlebars: Handlebars<'static>,
    templates: TemplatesFile,
}

impl PromptBuilder {
    /// Create a builder from a templates file
    pub fn new(templates: TemplatesFile) -> Self {
        let mut handlebars = Handlebars::new();

        // Field values are free text sent to a model, not markup
        handlebars.set_strict_mode(false);
        handlebars.register_escape_fn(handlebars::no_escape);

        handlebars.register_helper("bullets", Box::new(BulletsHelper));
        handlebars.register_helper("truncate", Box::new(TruncateHelper));

        for (name, template) in &templates.templates {
            let _ = handlebars.register_template_string(name, &template.template);
        }

        PromptBuilder {
            handlebars,
            templates,
        }
    }

    /// Load from a file path
    pub fn load(path: &str) -> Result<Self, String> {
        Ok(Self::new(TemplatesFile::load(path)?))
    }

    /// Builder over the embedded default templates
    pub fn builtin() -> Self {
        Self::new(TemplatesFile::builtin())
    }

    /// Render a named template with arbitrary data
    pub fn render(&self, template_name: &str, data: &Value) -> Result<String, String> {
        self.handlebars
            .render(template_name, data)
            .map_err(|e| format!("Render error: {}", e))
    }

    /// Render the template for an artifact kind from a campaign brief.
    /// Every brief field is substituted verbatim.
    pub fn render_brief(&self, kind: ArtifactKind, brief: &CampaignBrief) -> Result<String, String> {
        let data = serde_json::to_value(brief).map_err(|e| format!("Render error: {}", e))?;
        self.render(kind.template_name(), &data)
    }

    /// List available template names
    pub fn list_templates(&self) -> Vec<&str> {
        self.templates.list_templates()
    }
}

// ============================================================================
// Custom Helpers
// ============================================================================

/// Render a comma separated string as a dash list, one item per line
struct BulletsHelper;

impl HelperDef for BulletsHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let raw = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");

        let items: Vec<&str> = raw
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .collect();

        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                out.write("\n")?;
            }
            out.write("- ")?;
            out.write(item)?;
        }
        Ok(())
    }
}

/// Truncate a string to a max character count with ellipsis
struct TruncateHelper;

impl HelperDef for TruncateHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let text = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");
        let max_len = h.param(1).and_then(|v| v.value().as_u64()).unwrap_or(100) as usize;

        if text.chars().count() > max_len {
            let clipped: String = text.chars().take(max_len).collect();
            out.write(&clipped)?;
            out.write("...")?;
        } else {
            out.write(text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bullets_helper() {
        let builder = PromptBuilder::builtin();
        let out = builder
            .handlebars
            .render_template("{{bullets items}}", &json!({ "items": "a, b , ,c" }))
            .unwrap();
        assert_eq!(out, "- a\n- b\n- c");
    }

    #[test]
    fn test_bullets_helper_empty_input() {
        let builder = PromptBuilder::builtin();
        let out = builder
            .handlebars
            .render_template("{{bullets items}}", &json!({ "items": "" }))
            .unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn test_truncate_helper_is_char_safe() {
        let builder = PromptBuilder::builtin();
        let out = builder
            .handlebars
            .render_template("{{truncate text 3}}", &json!({ "text": "àéîøü!" }))
            .unwrap();
        assert_eq!(out, "àéî...");
    }

    #[test]
    fn test_values_are_not_html_escaped() {
        let builder = PromptBuilder::builtin();
        let out = builder
            .handlebars
            .render_template("{{text}}", &json!({ "text": "R&D <fast>" }))
            .unwrap();
        assert_eq!(out, "R&D <fast>");
    }
}
