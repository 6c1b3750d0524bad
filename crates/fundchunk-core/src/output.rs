//! Serialized extraction output
//!
//! The final record written to disk: document identification, the section
//! outline, the ordered chunk list and summary statistics. Everything here
//! is a plain serde tree so any structured format can carry it.

use crate::chunk::Chunk;
use crate::chunker::ChunkerConfig;
use crate::classify::SectionType;
use crate::fund::FundLookup;
use crate::section::{Section, SectionOutline};
use serde::{Deserialize, Serialize};

/// Chunks at or above this structural confidence count as high-confidence
/// in the statistics block.
pub const HIGH_CONFIDENCE_THRESHOLD: f32 = 0.7;

/// Extraction configuration echoed into the output for reproducibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfigInfo {
    /// Target chunk size in characters
    pub chunk_size: usize,
    /// Overlap in characters
    pub overlap: usize,
    /// Minimum chunk size in characters
    pub min_chunk_size: usize,
    /// Whether the element sequence came from an external structural import
    pub structured_input_used: bool,
    /// Whether page-number-only blocks were kept as labels
    pub keep_page_numbers: bool,
    /// When the extraction ran
    pub extraction_timestamp: chrono::DateTime<chrono::Utc>,
}

impl ExtractionConfigInfo {
    /// Snapshot the chunker configuration with the current time.
    #[must_use = "constructors return a new config snapshot"]
    pub fn from_config(
        config: ChunkerConfig,
        structured_input_used: bool,
        keep_page_numbers: bool,
    ) -> Self {
        Self {
            chunk_size: config.chunk_size,
            overlap: config.overlap,
            min_chunk_size: config.min_chunk_size,
            structured_input_used,
            keep_page_numbers,
            extraction_timestamp: chrono::Utc::now(),
        }
    }
}

/// Document identification and source metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentInfo {
    /// File name of the source document
    pub filename: String,
    /// Full path the document was read from
    pub source_path: String,
    /// Page count of the source
    pub total_pages: usize,
    /// Document title, when the source carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Document author
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Document subject
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Raw creation date string from the source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    /// Raw modification date string from the source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    /// Fund identity lookup result, attached unmodified
    pub fund: FundLookup,
    /// Extraction configuration
    pub extraction_config: ExtractionConfigInfo,
}

/// Summary statistics over the finished chunk list and outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Number of chunks produced
    pub total_chunks: usize,
    /// Sum of chunk word counts
    pub total_words: usize,
    /// Mean words per chunk, one decimal
    pub average_chunk_words: f64,
    /// Chunks at or above [`HIGH_CONFIDENCE_THRESHOLD`]
    pub high_confidence_chunks: usize,
    /// Number of detected sections
    pub structural_sections: usize,
    /// Number of distinct heading levels
    pub hierarchy_levels: usize,
    /// Distinct section types observed on chunks, excluding general content
    pub section_types_found: Vec<SectionType>,
    /// Pages whose visual features suggest a chart; filled by the pipeline
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub likely_chart_pages: Vec<u32>,
}

impl Statistics {
    /// Compute the summary block from the finished chunks and outline.
    #[must_use = "the computed statistics are returned but not used"]
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(chunks: &[Chunk], outline: &SectionOutline) -> Self {
        let total_chunks = chunks.len();
        let total_words: usize = chunks.iter().map(|c| c.word_count).sum();
        let average_chunk_words = if total_chunks == 0 {
            0.0
        } else {
            (total_words as f64 / total_chunks as f64 * 10.0).round() / 10.0
        };

        let high_confidence_chunks = chunks
            .iter()
            .filter(|c| c.structural_confidence >= HIGH_CONFIDENCE_THRESHOLD)
            .count();

        let mut section_types_found: Vec<SectionType> = Vec::new();
        for section_type in SectionType::ALL {
            if section_type == SectionType::GeneralContent {
                continue;
            }
            if chunks.iter().any(|c| c.section.section_type == section_type) {
                section_types_found.push(section_type);
            }
        }

        Self {
            total_chunks,
            total_words,
            average_chunk_words,
            high_confidence_chunks,
            structural_sections: outline.len(),
            hierarchy_levels: outline.hierarchy_levels(),
            section_types_found,
            likely_chart_pages: Vec::new(),
        }
    }
}

/// The complete serialized result of one document run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionOutput {
    /// Document identification and configuration
    pub document_info: DocumentInfo,
    /// Detected section hierarchy in document order
    pub document_structure: Vec<Section>,
    /// Ordered chunk list
    pub content_chunks: Vec<Chunk>,
    /// Summary statistics
    pub statistics: Statistics,
}
