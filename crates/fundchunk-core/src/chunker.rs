//! The chunk builder
//!
//! Transforms the ordered element sequence into the ordered chunk sequence
//! in one forward pass, then back-fills neighbor links and carryover
//! summaries in a second pass over the finished list.
//!
//! Boundary rules, per incoming element:
//!
//! 1. a heading finalizes any non-blank accumulator and becomes the section
//!    context for everything that follows;
//! 2. when appending the element would exceed `chunk_size` *and* the
//!    accumulator already holds more than `min_chunk_size` characters, the
//!    accumulator is finalized and the next one is seeded with the overlap
//!    suffix of the finalized content;
//! 3. every element is then appended with a blank-line separator.
//!
//! A single element larger than `chunk_size` is never split: the boundary
//! only fires once the accumulator itself is past `min_chunk_size`.

use crate::chunk::{Chunk, ChunkLinks, SectionContext};
use crate::classify::{classify_content, SectionType};
use crate::element::{Element, ElementType};
use crate::overlap::{carryover_summary, overlap_suffix};
use crate::section::SectionOutline;
use serde::{Deserialize, Serialize};

/// Chunking parameters, all counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkerConfig {
    /// Target maximum chunk length
    pub chunk_size: usize,

    /// Trailing content carried into the next chunk at a boundary
    pub overlap: usize,

    /// Accumulator length below which a boundary never fires
    pub min_chunk_size: usize,
}

impl ChunkerConfig {
    /// Set the target chunk size.
    #[inline]
    #[must_use = "builder methods return the modified config"]
    pub const fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the overlap carried across chunk boundaries.
    #[inline]
    #[must_use = "builder methods return the modified config"]
    pub const fn with_overlap(mut self, overlap: usize) -> Self {
        self.overlap = overlap;
        self
    }

    /// Set the minimum accumulator length for a boundary to fire.
    #[inline]
    #[must_use = "builder methods return the modified config"]
    pub const fn with_min_chunk_size(mut self, min_chunk_size: usize) -> Self {
        self.min_chunk_size = min_chunk_size;
        self
    }
}

impl Default for ChunkerConfig {
    #[inline]
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            overlap: 200,
            min_chunk_size: 100,
        }
    }
}

/// Rolling accumulator for the chunk under construction.
#[derive(Debug, Default)]
struct Accumulator {
    content: String,
    char_count: usize,
    pages: Vec<u32>,
    element_ids: Vec<String>,
    content_types: Vec<ElementType>,
    confidences: Vec<f32>,
}

impl Accumulator {
    fn seeded(seed: String) -> Self {
        Self {
            char_count: seed.chars().count(),
            content: seed,
            ..Self::default()
        }
    }

    fn push(&mut self, element: &Element) {
        if !self.content.is_empty() {
            self.content.push_str("\n\n");
            self.char_count += 2;
        }
        self.content.push_str(&element.content);
        self.char_count += element.content.chars().count();

        if !self.pages.contains(&element.page) {
            self.pages.push(element.page);
        }
        self.element_ids.push(element.id.clone());
        if !self.content_types.contains(&element.element_type) {
            self.content_types.push(element.element_type);
        }
        self.confidences.push(element.confidence);
    }

    fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// Builds chunks from an element sequence under a fixed configuration.
#[derive(Debug, Clone, Copy)]
pub struct ChunkBuilder {
    config: ChunkerConfig,
}

impl ChunkBuilder {
    /// Create a builder with the given configuration.
    #[inline]
    #[must_use = "constructors return a new builder"]
    pub const fn new(config: ChunkerConfig) -> Self {
        Self { config }
    }

    /// Run the full pass: accumulate, finalize, then link.
    ///
    /// An empty element sequence yields an empty chunk list.
    #[must_use = "the built chunk list is returned but not used"]
    pub fn build(&self, elements: &[Element], outline: &SectionOutline) -> Vec<Chunk> {
        let mut chunks: Vec<Chunk> = Vec::new();
        let mut acc = Accumulator::default();
        let mut current_section: Option<usize> = None;
        let mut headings_seen = 0usize;

        for element in elements {
            if element.is_heading() {
                if !acc.is_blank() {
                    let id = next_id(&chunks);
                    chunks.push(self.finalize(acc, id, current_section, outline));
                    acc = Accumulator::default();
                }
                // The n-th heading element is the n-th section in the
                // outline built from the same sequence.
                current_section = Some(headings_seen);
                headings_seen += 1;
            }

            let incoming = element.content.chars().count();
            if acc.char_count + incoming > self.config.chunk_size
                && acc.char_count > self.config.min_chunk_size
            {
                let id = next_id(&chunks);
                let finalized = self.finalize(acc, id, current_section, outline);
                let seed = overlap_suffix(&finalized.content, self.config.overlap);
                chunks.push(finalized);
                acc = Accumulator::seeded(seed);
            }

            acc.push(element);
        }

        if !acc.is_blank() {
            let id = next_id(&chunks);
            chunks.push(self.finalize(acc, id, current_section, outline));
        }

        link_chunks(&mut chunks);
        chunks
    }

    /// Compute the immutable chunk record from a full accumulator.
    #[allow(clippy::cast_precision_loss)]
    fn finalize(
        &self,
        acc: Accumulator,
        id: u32,
        current_section: Option<usize>,
        outline: &SectionOutline,
    ) -> Chunk {
        let content = acc.content.trim().to_string();
        let word_count = content.split_whitespace().count();
        let char_count = content.chars().count();

        let mut pages = acc.pages;
        pages.sort_unstable();

        let structural_confidence = if acc.confidences.is_empty() {
            0.5
        } else {
            acc.confidences.iter().sum::<f32>() / acc.confidences.len() as f32
        };

        let section = match current_section.and_then(|i| outline.get(i)) {
            Some(section) => {
                // Titles that classify to nothing specific defer to the
                // weighted content classifier over the chunk body.
                let section_type = if section.section_type == SectionType::GeneralContent {
                    classify_content(&content)
                } else {
                    section.section_type
                };
                SectionContext {
                    title: Some(section.title.clone()),
                    section_type,
                    level: section.level,
                    hierarchy_path: outline.hierarchy_path(section.index),
                }
            }
            None => SectionContext {
                title: None,
                section_type: classify_content(&content),
                level: 0,
                hierarchy_path: Vec::new(),
            },
        };

        log::debug!(
            "finalized chunk {id}: {char_count} chars, {} elements, section {:?}",
            acc.element_ids.len(),
            section.title
        );

        Chunk {
            id,
            content,
            word_count,
            char_count,
            pages,
            element_ids: acc.element_ids,
            content_types: acc.content_types,
            section,
            structural_confidence,
            links: ChunkLinks::default(),
            carryover_summary: None,
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn next_id(chunks: &[Chunk]) -> u32 {
    chunks.len() as u32 + 1
}

/// Second pass: positions, neighbor ids and carryover summaries.
pub fn link_chunks(chunks: &mut [Chunk]) {
    let total = chunks.len();
    let ids: Vec<u32> = chunks.iter().map(|c| c.id).collect();
    let summaries: Vec<String> = chunks
        .iter()
        .map(|c| carryover_summary(&c.content))
        .collect();

    for (i, chunk) in chunks.iter_mut().enumerate() {
        debug_assert_eq!(chunk.id as usize, i + 1, "chunk ids must be contiguous");

        chunk.links.position = format!("{}/{}", i + 1, total);
        if i > 0 {
            chunk.links.previous_chunk_id = Some(ids[i - 1]);
            chunk.carryover_summary = Some(summaries[i - 1].clone());
        }
        if i + 1 < total {
            chunk.links.next_chunk_id = Some(ids[i + 1]);
        }
    }
}
