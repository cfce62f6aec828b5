//! Adforge Parse: Completion to Campaign Sections
//!
//! This crate provides the tolerant splitting layer that turns one raw
//! completion into the named campaign sections (ad copy, calls to action,
//! image prompt) using literal delimiter markers.
//!
//! Parsing never fails. A missing marker degrades to an empty section and
//! a marker-free completion is treated as one block of primary content.
//!
//! # Example
//!
//! ```ignore
//! use adforge_parse::{CampaignSections, DEFAULT_MARKERS, split_sections};
//!
//! let raw = "---COPY---\nBig headline\n---CTA---\nBuy now\n---IMAGE---\nA sunrise";
//! let sections = CampaignSections::from_completion(raw);
//! assert_eq!(sections.call_to_action, "Buy now");
//! ```

pub mod markers;
pub mod sections;

pub use markers::{COPY_MARKER, CTA_MARKER, DEFAULT_MARKERS, IMAGE_MARKER};
pub use sections::{split_sections, ParsedSections, Section};

use serde::{Deserialize, Serialize};

/// The three campaign deliverables extracted from one completion.
/// Bodies are trimmed for display; the raw slices stay available on
/// [`ParsedSections`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignSections {
    pub ad_copy: String,
    pub call_to_action: String,
    pub image_prompt: String,
}

impl CampaignSections {
    /// Map a split view onto the campaign fields. When the copy marker is
    /// absent the preamble is the primary content and becomes the ad copy.
    pub fn from_parsed(parsed: &ParsedSections) -> Self {
        let copy = parsed.section(COPY_MARKER).unwrap_or("");
        let ad_copy = if copy.trim().is_empty() {
            parsed.preamble.trim()
        } else {
            copy.trim()
        };

        Self {
            ad_copy: ad_copy.to_string(),
            call_to_action: parsed.section(CTA_MARKER).unwrap_or("").trim().to_string(),
            image_prompt: parsed.section(IMAGE_MARKER).unwrap_or("").trim().to_string(),
        }
    }

    /// Split a raw completion on the default markers and map it.
    pub fn from_completion(text: &str) -> Self {
        Self::from_parsed(&split_sections(text, &DEFAULT_MARKERS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_completion_maps_to_fields() {
        let raw = "---COPY---\nBig headline\n---CTA---\nBuy now\n---IMAGE---\nA sunrise over mountains";
        let sections = CampaignSections::from_completion(raw);

        assert_eq!(sections.ad_copy, "Big headline");
        assert_eq!(sections.call_to_action, "Buy now");
        assert_eq!(sections.image_prompt, "A sunrise over mountains");
    }

    #[test]
    fn test_marker_free_completion_is_primary_content() {
        let raw = "Just a plain wall of ad copy with no structure.";
        let sections = CampaignSections::from_completion(raw);

        assert_eq!(sections.ad_copy, raw);
        assert_eq!(sections.call_to_action, "");
        assert_eq!(sections.image_prompt, "");
    }

    #[test]
    fn test_missing_single_marker_degrades_to_empty() {
        let raw = "---COPY---\nheadline only\n---IMAGE---\npicture";
        let sections = CampaignSections::from_completion(raw);

        assert_eq!(sections.ad_copy, "headline only");
        assert_eq!(sections.call_to_action, "");
        assert_eq!(sections.image_prompt, "picture");
    }

    #[test]
    fn test_preamble_feeds_ad_copy_when_copy_section_empty() {
        let raw = "The actual copy came first.\n---CTA---\nGo\n---IMAGE---\npic";
        let sections = CampaignSections::from_completion(raw);

        assert_eq!(sections.ad_copy, "The actual copy came first.");
        assert_eq!(sections.call_to_action, "Go");
    }

    #[test]
    fn test_no_content_is_dropped_by_classification() {
        // Concatenating the parsed pieces must cover every non-marker byte.
        let raw = "lead\n---COPY---one\n---CTA---two\n---IMAGE---three";
        let parsed = split_sections(raw, &DEFAULT_MARKERS);

        let mut recovered = parsed.preamble.clone();
        for section in &parsed.sections {
            recovered.push_str(&section.body);
        }
        assert_eq!(recovered, "lead\none\ntwo\nthree");
    }
}
