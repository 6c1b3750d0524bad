//! Document structure: detected headings and their hierarchy
//!
//! A [`Section`] is one detected heading with its placement in the document
//! tree. The [`SectionOutline`] owns the flat, document-ordered list of
//! sections and resolves parent/child links through stable integer indices
//! assigned at construction time. Titles are never used for lookup, so
//! re-ordering or filtering the rendered output cannot corrupt the links.

use crate::classify::{classify_title, SectionType};
use crate::element::Element;
use serde::{Deserialize, Serialize};

/// One detected heading and its subtree placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Stable handle: position in the outline's document-ordered list
    pub index: usize,

    /// Heading depth, always >= 1
    pub level: u8,

    /// Heading text
    pub title: String,

    /// Title-based classification
    pub section_type: SectionType,

    /// First page the section appears on
    pub start_page: u32,

    /// Last page covered before the next section at the same or higher level
    pub end_page: u32,

    /// Confidence inherited from the heading element
    pub confidence: f32,

    /// Index of the nearest preceding section with a strictly smaller level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<usize>,

    /// Indices of direct child sections, in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<usize>,
}

/// The document-ordered section list with hierarchy links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionOutline {
    sections: Vec<Section>,
}

impl SectionOutline {
    /// Build the outline in a single left-to-right pass over the element
    /// sequence.
    ///
    /// A level-ordered stack tracks the currently open sections: a new
    /// heading pops every open section at the same or a deeper level, then
    /// links to the remaining top as its parent. Non-heading elements only
    /// extend the `end_page` of whatever is open.
    #[must_use = "the constructed outline is returned but not used"]
    pub fn from_elements(elements: &[Element]) -> Self {
        let mut sections: Vec<Section> = Vec::new();
        let mut stack: Vec<usize> = Vec::new();

        for element in elements {
            if !element.is_heading() {
                for &open in &stack {
                    sections[open].end_page = sections[open].end_page.max(element.page);
                }
                continue;
            }

            let level = element.level.max(1);
            while stack
                .last()
                .map_or(false, |&top| sections[top].level >= level)
            {
                stack.pop();
            }
            let parent = stack.last().copied();
            debug_assert!(
                parent.map_or(true, |p| sections[p].level < level),
                "parent level must be strictly smaller"
            );

            let index = sections.len();
            if let Some(p) = parent {
                sections[p].children.push(index);
            }
            sections.push(Section {
                index,
                level,
                title: element.content.clone(),
                section_type: classify_title(&element.content),
                start_page: element.page,
                end_page: element.page,
                confidence: element.confidence,
                parent,
                children: Vec::new(),
            });
            stack.push(index);
        }

        Self { sections }
    }

    /// Number of sections.
    #[inline]
    #[must_use = "the section count is returned but not used"]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the outline holds no sections.
    #[inline]
    #[must_use = "the emptiness check is returned but not used"]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Section by stable index.
    #[inline]
    #[must_use = "the section lookup result is returned but not used"]
    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// All sections in document order.
    #[inline]
    #[must_use = "the section slice is returned but not used"]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Consume the outline, yielding the owned section list.
    #[inline]
    #[must_use = "the owned section list is returned but not used"]
    pub fn into_sections(self) -> Vec<Section> {
        self.sections
    }

    /// Ordered ancestor titles from the document root down to `index`.
    ///
    /// Walks the integer parent chain; an out-of-range index yields an
    /// empty path.
    #[must_use = "the hierarchy path is returned but not used"]
    pub fn hierarchy_path(&self, index: usize) -> Vec<String> {
        let mut path = Vec::new();
        let mut current = self.sections.get(index);
        while let Some(section) = current {
            path.push(section.title.clone());
            current = section.parent.and_then(|p| self.sections.get(p));
        }
        path.reverse();
        path
    }

    /// Count of distinct heading levels present.
    #[must_use = "the level count is returned but not used"]
    pub fn hierarchy_levels(&self) -> usize {
        let mut levels: Vec<u8> = self.sections.iter().map(|s| s.level).collect();
        levels.sort_unstable();
        levels.dedup();
        levels.len()
    }
}
