//! Raw page types at the external-parser boundary
//!
//! These types are the contract between fundchunk and whatever parsed the
//! document bytes: ordered pages of structured text blocks with optional
//! font hints, plus document-level metadata. The extractor consumes them;
//! it never touches document bytes itself.

use fundchunk_core::BoundingBox;
use serde::{Deserialize, Serialize};

/// Font/formatting hints for a raw block, when the source provides them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontHints {
    /// Font size in points
    pub size: f32,
    /// Whether the block is set in a bold face
    pub bold: bool,
}

impl FontHints {
    /// Fonts above this size count as "large" for heading detection.
    pub const LARGE_FONT_SIZE: f32 = 12.0;

    /// Whether the hints indicate a bold, large-font block.
    #[inline]
    #[must_use = "the heading-evidence check is returned but not used"]
    pub fn suggests_heading(&self) -> bool {
        self.bold && self.size > Self::LARGE_FONT_SIZE
    }
}

/// One structured text block in reading order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBlock {
    /// Block text as extracted
    pub text: String,

    /// Position on the page, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,

    /// Font hints, when the source exposes them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontHints>,
}

impl RawBlock {
    /// A block carrying only text.
    #[inline]
    #[must_use = "constructors return a new block"]
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bbox: None,
            font: None,
        }
    }
}

/// One page of raw blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPage {
    /// 1-based page number
    pub number: u32,

    /// Blocks in reading order
    pub blocks: Vec<RawBlock>,
}

/// Document-level metadata reported by the source parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// Document title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Document author
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Document subject
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Raw creation date string as stored in the document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,

    /// Raw modification date string as stored in the document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,

    /// Page count
    #[serde(default)]
    pub page_count: usize,
}

/// A fully parsed document: ordered pages plus metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedDocument {
    /// Pages in document order
    pub pages: Vec<RawPage>,

    /// Document-level metadata
    pub metadata: SourceMetadata,
}

impl ParsedDocument {
    fn default_metadata() -> SourceMetadata {
        SourceMetadata::default()
    }

    /// Build a document from pages alone, deriving the page count.
    #[must_use = "constructors return a new parsed document"]
    pub fn from_pages(pages: Vec<RawPage>) -> Self {
        let metadata = SourceMetadata {
            page_count: pages.len(),
            ..Self::default_metadata()
        };
        Self { pages, metadata }
    }
}
