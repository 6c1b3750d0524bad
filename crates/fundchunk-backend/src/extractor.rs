//! Page element extraction
//!
//! Converts raw per-page text blocks into the ordered [`Element`] sequence
//! the chunk builder consumes. Per-block problems are logged and skipped;
//! a page never aborts the run.

use crate::clean::{clean_block_text, is_noise_block};
use crate::traits::ExtractOptions;
use crate::types::{ParsedDocument, RawPage};
use crate::typing::{classify_block, heading_level, is_page_number, TypedBlock};
use fundchunk_core::{Element, ElementType};

/// Confidence assigned when font hints back the heading decision.
const FONT_BACKED_CONFIDENCE: f32 = 0.9;
/// Confidence for headings recognized from text patterns alone.
const PATTERN_HEADING_CONFIDENCE: f32 = 0.7;
/// Confidence for every other text-derived typing decision.
const TEXT_CONFIDENCE: f32 = 0.6;

/// Extracts typed elements from raw pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageElementExtractor {
    options: ExtractOptions,
}

impl PageElementExtractor {
    /// Create an extractor with the given options.
    #[inline]
    #[must_use = "constructors return a new extractor"]
    pub const fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// The options this extractor runs with.
    #[inline]
    #[must_use = "the options are returned but not used"]
    pub const fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract the element sequence for one page.
    #[must_use = "the extracted elements are returned but not used"]
    pub fn extract_page(&self, page: &RawPage) -> Vec<Element> {
        let mut elements = Vec::new();

        for (i, block) in page.blocks.iter().enumerate() {
            let text = if self.options.clean_text {
                clean_block_text(&block.text)
            } else {
                block.text.trim().to_string()
            };

            if is_page_number(&text) {
                if self.options.keep_page_numbers {
                    let id = format!("page_{}_block_{}", page.number, i + 1);
                    elements.push(
                        Element::new(id, text, ElementType::Label, page.number)
                            .with_confidence(0.0),
                    );
                } else {
                    log::debug!("page {}: dropped page-number block {:?}", page.number, text);
                }
                continue;
            }

            if is_noise_block(&text, self.options.min_block_len) {
                log::debug!(
                    "page {}: skipped noise block {:?}",
                    page.number,
                    text.chars().take(40).collect::<String>()
                );
                continue;
            }

            let typed = classify_block(&text, block.font.as_ref());
            let element_type = match typed {
                TypedBlock::Element(t) => t,
                // Unreachable after the explicit check above, but a typing
                // change must not silently drop content.
                TypedBlock::PageNumber => ElementType::Label,
            };

            let id = format!("page_{}_block_{}", page.number, i + 1);
            let mut element = Element::new(id, text, element_type, page.number);

            if let Some(bbox) = block.bbox {
                element = element.with_bbox(bbox);
            }

            if element_type == ElementType::Heading {
                let font_backed = block
                    .font
                    .as_ref()
                    .is_some_and(crate::types::FontHints::suggests_heading);
                let level = heading_level(&element.content, None);
                element = element
                    .with_level(level)
                    .with_confidence(if font_backed {
                        FONT_BACKED_CONFIDENCE
                    } else {
                        PATTERN_HEADING_CONFIDENCE
                    });
            } else {
                element = element.with_confidence(TEXT_CONFIDENCE);
            }

            elements.push(element);
        }

        elements
    }

    /// Extract the document-wide element sequence, page order preserved.
    #[must_use = "the extracted elements are returned but not used"]
    pub fn extract_document(&self, document: &ParsedDocument) -> Vec<Element> {
        let mut all = Vec::new();
        for page in &document.pages {
            let elements = self.extract_page(page);
            log::debug!("page {}: {} elements", page.number, elements.len());
            all.extend(elements);
        }
        all
    }
}
