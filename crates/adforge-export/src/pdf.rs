//! PDF rendering boundary.
//!
//! The core hands the renderer a title block and a list of labeled
//! sections; everything about layout stays behind the [`PdfRenderer`]
//! trait. Text is clamped to the Latin-1 repertoire before it reaches the
//! page, so rendering never fails on exotic input.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};
use thiserror::Error;

use crate::sanitize::{latin1_bytes, sanitize_latin1};

/// One labeled free-text block of the document.
#[derive(Debug, Clone)]
pub struct PdfSection {
    pub title: String,
    pub body: String,
}

/// Errors surfaced by the export layer
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("pdf encoding failed: {0}")]
    Pdf(String),
}

/// Renders a title block plus labeled sections into a binary document.
pub trait PdfRenderer: Send + Sync {
    fn render(
        &self,
        title: &str,
        subtitle: &str,
        sections: &[PdfSection],
    ) -> Result<Vec<u8>, ExportError>;
}

/// A4 portrait renderer over the built-in Type1 fonts.
#[derive(Debug, Clone)]
pub struct LopdfRenderer {
    /// Max characters per body line before wrapping
    pub wrap_width: usize,
    /// Text lines per page before a page break
    pub lines_per_page: usize,
}

impl Default for LopdfRenderer {
    fn default() -> Self {
        Self {
            wrap_width: 90,
            lines_per_page: 48,
        }
    }
}

/// One laid-out line with its font selection.
struct Line {
    text: String,
    bold: bool,
    size: i64,
}

impl Line {
    fn regular(text: impl Into<String>, size: i64) -> Self {
        Self {
            text: text.into(),
            bold: false,
            size,
        }
    }

    fn bold(text: impl Into<String>, size: i64) -> Self {
        Self {
            text: text.into(),
            bold: true,
            size,
        }
    }

    fn blank() -> Self {
        Self::regular("", 11)
    }
}

impl LopdfRenderer {
    /// Greedy word wrap; words longer than the width are hard-split.
    fn wrap(&self, text: &str) -> Vec<String> {
        let mut lines = Vec::new();
        for raw_line in text.split('\n') {
            let mut current = String::new();
            for word in raw_line.split_whitespace() {
                let mut word = word;
                while word.chars().count() > self.wrap_width {
                    if !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                    }
                    let split_at = word
                        .char_indices()
                        .nth(self.wrap_width)
                        .map_or(word.len(), |(i, _)| i);
                    lines.push(word[..split_at].to_string());
                    word = &word[split_at..];
                }
                let needed = current.chars().count() + 1 + word.chars().count();
                if !current.is_empty() && needed > self.wrap_width {
                    lines.push(std::mem::take(&mut current));
                }
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
            }
            lines.push(current);
        }
        lines
    }

    fn layout(&self, title: &str, subtitle: &str, sections: &[PdfSection]) -> Vec<Line> {
        let mut lines = vec![
            Line::bold(sanitize_latin1(title), 18),
            Line::regular(sanitize_latin1(subtitle), 12),
            Line::blank(),
        ];

        for section in sections {
            lines.push(Line::blank());
            lines.push(Line::bold(sanitize_latin1(&section.title), 13));
            for body_line in self.wrap(&sanitize_latin1(&section.body)) {
                lines.push(Line::regular(body_line, 11));
            }
        }
        lines
    }

    fn page_content(&self, lines: &[Line]) -> Content {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Td", vec![50.into(), 790.into()]),
            Operation::new("TL", vec![14.into()]),
        ];

        let mut current_font: Option<(&str, i64)> = None;
        for line in lines {
            let font = if line.bold { "F2" } else { "F1" };
            if current_font != Some((font, line.size)) {
                operations.push(Operation::new("Tf", vec![font.into(), line.size.into()]));
                current_font = Some((font, line.size));
            }
            if !line.text.is_empty() {
                operations.push(Operation::new(
                    "Tj",
                    vec![Object::String(latin1_bytes(&line.text), StringFormat::Literal)],
                ));
            }
            operations.push(Operation::new("T*", vec![]));
        }

        operations.push(Operation::new("ET", vec![]));
        Content { operations }
    }
}

impl PdfRenderer for LopdfRenderer {
    fn render(
        &self,
        title: &str,
        subtitle: &str,
        sections: &[PdfSection],
    ) -> Result<Vec<u8>, ExportError> {
        let lines = self.layout(title, subtitle, sections);
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_regular = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let font_bold = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_regular,
                "F2" => font_bold,
            },
        });

        // layout() always emits the title block, so there is at least one page
        let mut page_ids: Vec<Object> = Vec::new();
        for chunk in lines.chunks(self.lines_per_page.max(1)) {
            let content = self.page_content(chunk);
            let encoded = content
                .encode()
                .map_err(|e| ExportError::Pdf(e.to_string()))?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            page_ids.push(page_id.into());
        }

        let page_count = page_ids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => page_ids,
                "Count" => page_count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|e| ExportError::Pdf(e.to_string()))?;
        Ok(buffer)
    }
}
