//! Marker-delimited section splitting.
//!
//! Matching policy: each declared marker is located by its FIRST
//! occurrence in the text; the position-sorted hits are the section
//! boundaries. A marker that appears again later is plain content, and a
//! marker that never appears yields no section. Declared order decides
//! which field a marker feeds, never how the text is cut, so splitting is
//! stable even when the model emits sections out of order.

use serde::{Deserialize, Serialize};

/// One extracted section: the marker that introduced it and the raw text
/// that followed it, up to the next boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub marker: String,
    pub body: String,
}

/// The split view of a completion. Segments are exact slices; nothing is
/// trimmed or dropped, so the original text can always be rebuilt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSections {
    /// Text before the earliest marker; the whole input when no marker is
    /// present. This is the primary content.
    pub preamble: String,
    /// Sections in the order they occur in the text.
    pub sections: Vec<Section>,
}

impl ParsedSections {
    /// Body of the section introduced by `marker`, if that marker occurred.
    pub fn section(&self, marker: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.marker == marker)
            .map(|s| s.body.as_str())
    }

    /// Rebuild the original input: preamble, then each marker and its raw
    /// body in positional order.
    pub fn reconstruct(&self) -> String {
        let mut out = self.preamble.clone();
        for section in &self.sections {
            out.push_str(&section.marker);
            out.push_str(&section.body);
        }
        out
    }
}

/// Split `text` on the declared markers. Never fails: absent markers are a
/// normal condition and produce no section.
pub fn split_sections(text: &str, markers: &[&str]) -> ParsedSections {
    let mut hits: Vec<(usize, &str)> = markers
        .iter()
        .filter_map(|marker| text.find(marker).map(|pos| (pos, *marker)))
        .collect();
    hits.sort_unstable_by_key(|(pos, _)| *pos);

    let preamble_end = hits.first().map_or(text.len(), |(pos, _)| *pos);
    let mut sections = Vec::with_capacity(hits.len());

    for (i, (pos, marker)) in hits.iter().enumerate() {
        let body_start = pos + marker.len();
        let body_end = hits.get(i + 1).map_or(text.len(), |(next, _)| *next);
        // Overlapping hits cannot happen with the default markers, but a
        // caller-supplied set could contain substrings of each other.
        let body_end = body_end.max(body_start);
        sections.push(Section {
            marker: (*marker).to_string(),
            body: text[body_start..body_end].to_string(),
        });
    }

    ParsedSections {
        preamble: text[..preamble_end].to_string(),
        sections,
    }
}
