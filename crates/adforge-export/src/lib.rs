//! Adforge Export: PDF and Share-Link Output
//!
//! Everything that leaves the tool in a shape other than JSON: the PDF
//! rendering boundary (with its character sanitization) and the social
//! share deep links.

pub mod pdf;
pub mod sanitize;
pub mod share;

pub use pdf::{ExportError, LopdfRenderer, PdfRenderer, PdfSection};
pub use sanitize::{latin1_bytes, sanitize_latin1};
pub use share::{share_links, ShareLinks};
