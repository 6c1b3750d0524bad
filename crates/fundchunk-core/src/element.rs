//! Element types for extracted page content
//!
//! An [`Element`] is one classified atomic unit of content pulled out of a
//! page: a heading, a paragraph, a list item, a table row and so on.
//! Elements are created once during the page scan and are read-only for the
//! rest of the run.

use serde::{Deserialize, Serialize};

/// The closed set of element types the extractor can assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    /// Section or document heading
    Heading,
    /// Long body text (> 200 chars)
    Paragraph,
    /// Bulleted, numbered or lettered list entry
    ListItem,
    /// Row-like text carrying tabular data
    TableData,
    /// Footnote, source note or similar short annotation
    Footnote,
    /// Very short text (captions, page furniture, stray labels)
    Label,
    /// Mid-length text that fits no other category
    TextBlock,
    /// Image or chart descriptor
    Image,
    /// Caption attached to a figure or table
    Caption,
}

impl std::fmt::Display for ElementType {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Heading => "heading",
            Self::Paragraph => "paragraph",
            Self::ListItem => "list_item",
            Self::TableData => "table_data",
            Self::Footnote => "footnote",
            Self::Label => "label",
            Self::TextBlock => "text_block",
            Self::Image => "image",
            Self::Caption => "caption",
        };
        write!(f, "{s}")
    }
}

/// Axis-aligned bounding box in page coordinates.
///
/// Opaque to the chunking core; carried through from the source parser so
/// downstream consumers can locate an element on its page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge
    pub l: f64,
    /// Top edge
    pub t: f64,
    /// Right edge
    pub r: f64,
    /// Bottom edge
    pub b: f64,
}

impl BoundingBox {
    /// Create a new bounding box from edge coordinates.
    #[inline]
    #[must_use = "constructors return a new bounding box"]
    pub const fn new(l: f64, t: f64, r: f64, b: f64) -> Self {
        Self { l, t, r, b }
    }

    /// Width of the box.
    #[inline]
    #[must_use = "box width is computed but not used"]
    pub fn width(&self) -> f64 {
        (self.r - self.l).abs()
    }

    /// Height of the box.
    #[inline]
    #[must_use = "box height is computed but not used"]
    pub fn height(&self) -> f64 {
        (self.b - self.t).abs()
    }
}

/// One extracted content unit.
///
/// `level` is only meaningful for headings (1-6); every other element type
/// carries 0. `confidence` estimates how reliable the type/level assignment
/// is, in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Stable identifier, e.g. `page_3_block_7`
    pub id: String,

    /// Text content, non-empty after trimming
    pub content: String,

    /// Assigned element type
    pub element_type: ElementType,

    /// 1-based page number
    pub page: u32,

    /// Heading depth (1-6), 0 for non-headings
    #[serde(default)]
    pub level: u8,

    /// Reliability of the typing/level assignment
    #[serde(default = "default_confidence")]
    pub confidence: f32,

    /// Position on the page, when the source provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
}

#[inline]
const fn default_confidence() -> f32 {
    0.5
}

impl Element {
    /// Create an element with default level, confidence and no bounding box.
    #[must_use = "constructors return a new element"]
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        element_type: ElementType,
        page: u32,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            element_type,
            page,
            level: 0,
            confidence: default_confidence(),
            bbox: None,
        }
    }

    /// Set the heading level (clamped to 1-6 for headings).
    #[inline]
    #[must_use = "builder methods return the modified element"]
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level.min(6);
        self
    }

    /// Set the typing confidence.
    #[inline]
    #[must_use = "builder methods return the modified element"]
    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence.clamp(0.0, 1.0);
        self
    }

    /// Attach a bounding box.
    #[inline]
    #[must_use = "builder methods return the modified element"]
    pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    /// Whether this element is a heading.
    #[inline]
    #[must_use = "heading check result is returned but not used"]
    pub fn is_heading(&self) -> bool {
        self.element_type == ElementType::Heading
    }
}
