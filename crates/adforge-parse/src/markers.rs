//! Section markers the multi-post template asks the model to emit.
//!
//! These are literal substrings, not a syntax; matching is a plain
//! substring search.

pub const COPY_MARKER: &str = "---COPY---";
pub const CTA_MARKER: &str = "---CTA---";
pub const IMAGE_MARKER: &str = "---IMAGE---";

/// Declared marker set, in the order the template requests them.
pub const DEFAULT_MARKERS: [&str; 3] = [COPY_MARKER, CTA_MARKER, IMAGE_MARKER];
