//! Structured element import from an external converter
//!
//! When a richer structural extraction exists (headings, sections and
//! tables already identified by an external document-conversion tool), its
//! JSON element dump replaces the page-scan path entirely. Both paths
//! produce the same [`Element`] shape, so everything downstream is
//! unchanged.

use crate::typing::heading_level;
use fundchunk_core::{BoundingBox, Element, ElementType, Result};
use serde::Deserialize;
use std::path::Path;

/// Confidence assigned to externally identified elements.
const IMPORT_CONFIDENCE: f32 = 0.9;

/// One element as emitted by the external converter.
#[derive(Debug, Deserialize)]
struct ImportedElement {
    #[serde(alias = "type")]
    element_type: String,
    content: String,
    #[serde(default)]
    level: Option<u8>,
    #[serde(default = "default_page")]
    page: u32,
    #[serde(default)]
    bbox: Option<BoundingBox>,
    #[serde(default)]
    confidence: Option<f32>,
}

const fn default_page() -> u32 {
    1
}

/// Map the converter's type vocabulary onto [`ElementType`].
fn map_element_type(name: &str) -> ElementType {
    match name {
        "title" | "section-header" | "section_header" | "heading" => ElementType::Heading,
        "paragraph" | "text" => ElementType::Paragraph,
        "list" | "list-item" | "list_item" => ElementType::ListItem,
        "table" | "table-row" | "table_data" => ElementType::TableData,
        "figure" | "picture" | "image" => ElementType::Image,
        "caption" => ElementType::Caption,
        "footnote" => ElementType::Footnote,
        "label" => ElementType::Label,
        _ => ElementType::TextBlock,
    }
}

/// Reader for external structural element dumps.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuredSource;

impl StructuredSource {
    /// Load and convert an element dump.
    ///
    /// Entries shorter than three characters after trimming are dropped,
    /// matching the page-scan path. Heading levels come from the converter
    /// when given, otherwise from the level heuristics.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid JSON of
    /// the expected shape.
    pub fn load_elements(path: &Path) -> Result<Vec<Element>> {
        let data = std::fs::read_to_string(path)?;
        let imported: Vec<ImportedElement> = serde_json::from_str(&data)?;

        let mut elements = Vec::with_capacity(imported.len());
        for (i, entry) in imported.into_iter().enumerate() {
            let content = entry.content.trim().to_string();
            if content.chars().count() < 3 {
                continue;
            }

            let element_type = map_element_type(&entry.element_type);
            let mut element = Element::new(
                format!("import_{}_{}", entry.element_type, i + 1),
                content,
                element_type,
                entry.page.max(1),
            )
            .with_confidence(entry.confidence.unwrap_or(IMPORT_CONFIDENCE));

            if element_type == ElementType::Heading {
                let level = heading_level(&element.content, entry.level);
                element = element.with_level(level);
            }
            if let Some(bbox) = entry.bbox {
                element = element.with_bbox(bbox);
            }

            elements.push(element);
        }

        log::info!(
            "structured import: {} elements from {}",
            elements.len(),
            path.display()
        );
        Ok(elements)
    }
}
