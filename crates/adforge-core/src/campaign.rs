//! Data model: CampaignBrief, GenerationRequest, CampaignResult, HistoryEntry
use serde::{Deserialize, Serialize};
use std::fmt;

/// Target platform for a campaign. The canonical set the tool supports;
/// deserialization rejects anything outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "Facebook Ads")]
    FacebookAds,
    #[serde(rename = "Instagram")]
    Instagram,
    #[serde(rename = "X (Twitter)")]
    XTwitter,
    #[serde(rename = "Landing Page")]
    LandingPage,
    #[serde(rename = "Email Marketing")]
    EmailMarketing,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::FacebookAds,
        Platform::Instagram,
        Platform::XTwitter,
        Platform::LandingPage,
        Platform::EmailMarketing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::FacebookAds => "Facebook Ads",
            Platform::Instagram => "Instagram",
            Platform::XTwitter => "X (Twitter)",
            Platform::LandingPage => "Landing Page",
            Platform::EmailMarketing => "Email Marketing",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Voice of the generated copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Emotional,
    Luxury,
    Aggressive,
    Inspirational,
    Minimal,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Emotional,
        Tone::Luxury,
        Tone::Aggressive,
        Tone::Inspirational,
        Tone::Minimal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Emotional => "Emotional",
            Tone::Luxury => "Luxury",
            Tone::Aggressive => "Aggressive",
            Tone::Inspirational => "Inspirational",
            Tone::Minimal => "Minimal",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A campaign brief as collected from the caller. Immutable once built.
///
/// Free-text fields are carried verbatim; the core performs no validation
/// beyond what serde enforces on the two enums. Empty fields and malformed
/// links flow through to the generation call unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignBrief {
    /// Market niche (ex: "Spiritual Growth & Mindset")
    pub niche: String,
    /// Where the copy will run
    pub platform: Platform,
    /// Voice of the copy
    pub tone: Tone,
    /// Product name, inserted verbatim into every template
    pub product: String,
    /// Customer pain point the copy agitates
    pub pain_point: String,
    /// Main benefits, comma separated free text
    pub benefits: String,
    /// Destination / affiliate link
    pub link: String,
}

/// Which prompt artifact to build from a brief.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// Single ad copy with the fixed headline/hook/agitation/benefits/CTA structure
    AdCopy,
    /// One image-generation prompt for the campaign visual
    ImagePrompt,
    /// Copy + CTA + image prompt in one completion, split by literal markers
    MultiPost,
}

impl ArtifactKind {
    /// Name of the template this kind renders with.
    pub fn template_name(&self) -> &'static str {
        match self {
            ArtifactKind::AdCopy => "ad_copy",
            ArtifactKind::ImagePrompt => "image_prompt",
            ArtifactKind::MultiPost => "multi_post",
        }
    }
}

/// Sampling parameters forwarded to the completion provider.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SamplingParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.8,
            max_tokens: 700,
        }
    }
}

/// Everything a single generation call needs. A pure function of its
/// inputs; holds no hidden state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub brief: CampaignBrief,
    pub kind: ArtifactKind,
    /// Model identifier understood by the provider
    pub model: String,
    pub sampling: SamplingParams,
}

/// The outcome of a generation: the raw completion plus its sectioned view.
///
/// For single-artifact kinds only the matching field is populated; for the
/// multi-post kind the three fields come out of the marker split.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CampaignResult {
    /// Raw completion text exactly as returned by the provider
    pub raw: String,
    pub ad_copy: String,
    pub call_to_action: String,
    pub image_prompt: String,
}

/// One line of campaign history. Created once per successful generation,
/// appended to an ordered log, never mutated. The serde names are the
/// on-disk wire format of the file-backed store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "product")]
    pub product: String,
    #[serde(rename = "copy")]
    pub ad_copy: String,
    #[serde(rename = "cta")]
    pub cta: String,
    #[serde(rename = "image")]
    pub image_prompt: String,
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_platform_serde_round_trip() {
        for platform in Platform::ALL {
            let json = serde_json::to_string(&platform).unwrap();
            assert_eq!(json, format!("\"{}\"", platform.as_str()));
            let back: Platform = serde_json::from_str(&json).unwrap();
            assert_eq!(back, platform);
        }
    }

    #[test]
    fn test_unknown_platform_rejected() {
        let result: Result<Platform, _> = serde_json::from_str("\"TikTok\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_brief_serializes_enum_display_names() {
        let value = serde_json::to_value(brief()).unwrap();
        assert_eq!(value["platform"], "Instagram");
        assert_eq!(value["tone"], "Aggressive");
        assert_eq!(value["product"], "ShredPro");
    }

    #[test]
    fn test_history_entry_wire_format() {
        let entry = HistoryEntry {
            product: "ShredPro".to_string(),
            ad_copy: "Buy it".to_string(),
            cta: "Now".to_string(),
            image_prompt: "A gym at dawn".to_string(),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["product"], "ShredPro");
        assert_eq!(value["copy"], "Buy it");
        assert_eq!(value["cta"], "Now");
        assert_eq!(value["image"], "A gym at dawn");
    }

    #[test]
    fn test_sampling_defaults() {
        let params = SamplingParams::default();
        assert_eq!(params.max_tokens, 700);
        assert!((params.temperature - 0.8).abs() < f32::EPSILON);
    }
}
