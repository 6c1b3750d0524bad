//! # Fundchunk Core
//!
//! Chunking and structural classification for financial-offering documents.
//! Takes the ordered element sequence produced by a page scan (or by an
//! external structural converter) and turns it into overlapping,
//! context-annotated chunks for retrieval and LLM consumption.
//!
//! The pipeline is strictly one way: element sequence → section outline →
//! chunk sequence → serialized output. No feedback loops, no concurrency,
//! no I/O in this crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use fundchunk_core::{ChunkBuilder, ChunkerConfig, Element, ElementType, SectionOutline};
//!
//! let elements = vec![
//!     Element::new("h1", "Risk Factors", ElementType::Heading, 1).with_level(1),
//!     Element::new("p1", "An investment in the fund involves a high degree of risk.",
//!         ElementType::Paragraph, 1),
//! ];
//!
//! let outline = SectionOutline::from_elements(&elements);
//! let chunks = ChunkBuilder::new(ChunkerConfig::default()).build(&elements, &outline);
//!
//! for chunk in &chunks {
//!     println!("chunk {} [{}]: {} words", chunk.id, chunk.links.position, chunk.word_count);
//! }
//! ```
//!
//! ## Custom configuration
//!
//! ```rust
//! use fundchunk_core::ChunkerConfig;
//!
//! let config = ChunkerConfig::default()
//!     .with_chunk_size(800)
//!     .with_overlap(150)
//!     .with_min_chunk_size(80);
//! assert_eq!(config.chunk_size, 800);
//! ```

pub mod chunk;
pub mod chunker;
pub mod classify;
pub mod element;
pub mod error;
pub mod fund;
pub mod output;
pub mod overlap;
pub mod section;

pub use chunk::{Chunk, ChunkLinks, SectionContext};
pub use chunker::{link_chunks, ChunkBuilder, ChunkerConfig};
pub use classify::{classify_content, classify_title, score_content, ContentScores, SectionType};
pub use element::{BoundingBox, Element, ElementType};
pub use error::{FundchunkError, Result};
pub use fund::{FundLookup, FundRecord};
pub use output::{
    DocumentInfo, ExtractionConfigInfo, ExtractionOutput, Statistics, HIGH_CONFIDENCE_THRESHOLD,
};
pub use overlap::{carryover_summary, overlap_suffix};
pub use section::{Section, SectionOutline};
