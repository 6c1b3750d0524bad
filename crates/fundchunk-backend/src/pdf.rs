//! PDF document source backed by `lopdf`
//!
//! Plain-text extraction per page: blocks are the blank-line-separated
//! paragraphs of the page text, with no font hints (the typing heuristics
//! fall back to text evidence, which is the same contract the page-scan
//! path has always had). A page whose text extraction fails is logged and
//! degraded to an empty page; only a document that cannot be loaded at all
//! is an error.

use crate::traits::DocumentSource;
use crate::types::{ParsedDocument, RawBlock, RawPage, SourceMetadata};
use fundchunk_core::{FundchunkError, Result};
use lopdf::{Dictionary, Document, Object};
use std::path::Path;

/// `lopdf`-backed document source.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfSource;

impl PdfSource {
    /// Create a new PDF source.
    #[inline]
    #[must_use = "constructors return a new source"]
    pub const fn new() -> Self {
        Self
    }
}

impl DocumentSource for PdfSource {
    fn parse_file(&self, path: &Path) -> Result<ParsedDocument> {
        let doc = Document::load(path).map_err(|e| {
            FundchunkError::Extraction(format!("failed to load PDF {}: {e}", path.display()))
        })?;

        let page_map = doc.get_pages();
        let mut pages = Vec::with_capacity(page_map.len());

        for &number in page_map.keys() {
            let text = match doc.extract_text(&[number]) {
                Ok(text) => text,
                Err(e) => {
                    log::warn!("page {number}: text extraction failed, page degraded: {e}");
                    String::new()
                }
            };
            pages.push(RawPage {
                number,
                blocks: split_blocks(&text),
            });
        }

        let metadata = read_metadata(&doc, pages.len());
        log::info!(
            "loaded {} ({} pages)",
            path.display(),
            metadata.page_count
        );

        Ok(ParsedDocument { pages, metadata })
    }
}

/// Split page text into blank-line-separated blocks.
fn split_blocks(text: &str) -> Vec<RawBlock> {
    let mut blocks = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.trim().is_empty() {
                blocks.push(RawBlock::text_only(current.trim_end().to_string()));
            }
            current.clear();
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    if !current.trim().is_empty() {
        blocks.push(RawBlock::text_only(current.trim_end().to_string()));
    }

    blocks
}

fn read_metadata(doc: &Document, page_count: usize) -> SourceMetadata {
    let info = doc
        .trailer
        .get(b"Info")
        .ok()
        .and_then(|object| resolve(doc, object))
        .and_then(|object| object.as_dict().ok());

    let field = |dict: &Dictionary, key: &[u8]| -> Option<String> {
        match dict.get(key) {
            Ok(Object::String(bytes, _)) => {
                let value = String::from_utf8_lossy(bytes).trim().to_string();
                (!value.is_empty()).then_some(value)
            }
            _ => None,
        }
    };

    match info {
        Some(dict) => SourceMetadata {
            title: field(dict, b"Title"),
            author: field(dict, b"Author"),
            subject: field(dict, b"Subject"),
            created: field(dict, b"CreationDate"),
            modified: field(dict, b"ModDate"),
            page_count,
        },
        None => SourceMetadata {
            page_count,
            ..SourceMetadata::default()
        },
    }
}

fn resolve<'a>(doc: &'a Document, object: &'a Object) -> Option<&'a Object> {
    match object {
        Object::Reference(id) => doc.get_object(*id).ok(),
        other => Some(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_blocks_on_blank_lines() {
        let text = "RISK FACTORS\n\nFirst paragraph line one\nline two\n\n\nSecond paragraph";
        let blocks = split_blocks(text);

        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].text, "RISK FACTORS");
        assert_eq!(blocks[1].text, "First paragraph line one\nline two");
        assert_eq!(blocks[2].text, "Second paragraph");
    }

    #[test]
    fn test_split_blocks_empty_text() {
        assert!(split_blocks("").is_empty());
        assert!(split_blocks("\n\n  \n").is_empty());
    }

    #[test]
    fn test_parse_missing_file_is_extraction_error() {
        let source = PdfSource::new();
        let result = source.parse_file(Path::new("/nonexistent/offering.pdf"));
        assert!(matches!(result, Err(FundchunkError::Extraction(_))));
    }

    #[test]
    fn test_parse_non_pdf_bytes_is_extraction_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not_a_pdf.pdf");
        std::fs::write(&path, b"plain text, not a PDF").unwrap();

        let source = PdfSource::new();
        assert!(source.parse_file(&path).is_err());
    }
}
