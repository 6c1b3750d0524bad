//! Chunk output types
//!
//! A [`Chunk`] is the externally consumed unit: a bounded span of document
//! content plus the structural and neighbor context a retrieval consumer
//! needs to use it in isolation.

use crate::classify::SectionType;
use crate::element::ElementType;
use serde::{Deserialize, Serialize};

/// Section context attached to a chunk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionContext {
    /// Title of the nearest preceding heading, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Semantic category of the section (or of the chunk body when no
    /// classified heading is in scope)
    #[serde(default)]
    pub section_type: SectionType,

    /// Heading depth of the governing section, 0 when none
    #[serde(default)]
    pub level: u8,

    /// Ancestor titles from the document root down to the section
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hierarchy_path: Vec<String>,
}

/// Neighbor links populated in the second pass over the chunk list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChunkLinks {
    /// Id of the preceding chunk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_chunk_id: Option<u32>,

    /// Id of the following chunk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_chunk_id: Option<u32>,

    /// Position marker `"i/N"`
    #[serde(default)]
    pub position: String,
}

/// One finalized chunk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// 1-based, contiguous sequence number
    pub id: u32,

    /// Aggregated text, including any overlap seed from the previous chunk
    pub content: String,

    /// Whitespace-separated word count of `content`
    pub word_count: usize,

    /// Character count of `content`
    pub char_count: usize,

    /// Source pages, sorted and deduplicated
    pub pages: Vec<u32>,

    /// Ids of the contributing elements, in order
    pub element_ids: Vec<String>,

    /// Element types present, first-seen order
    pub content_types: Vec<ElementType>,

    /// Structural context
    pub section: SectionContext,

    /// Mean confidence of the contributing elements (0.5 fallback)
    pub structural_confidence: f32,

    /// Neighbor links and position
    #[serde(default)]
    pub links: ChunkLinks,

    /// Compressed context from the previous chunk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carryover_summary: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_serde_roundtrip() {
        let chunk = Chunk {
            id: 3,
            content: "Fee schedule for Class A shares.".to_string(),
            word_count: 6,
            char_count: 32,
            pages: vec![4, 5],
            element_ids: vec!["page_4_block_2".to_string()],
            content_types: vec![ElementType::Paragraph, ElementType::TableData],
            section: SectionContext {
                title: Some("Fees and Expenses".to_string()),
                section_type: SectionType::Fees,
                level: 2,
                hierarchy_path: vec!["Fund Terms".to_string(), "Fees and Expenses".to_string()],
            },
            structural_confidence: 0.75,
            links: ChunkLinks {
                previous_chunk_id: Some(2),
                next_chunk_id: Some(4),
                position: "3/7".to_string(),
            },
            carryover_summary: Some("prior context".to_string()),
        };

        let json = serde_json::to_string(&chunk).unwrap();
        let back: Chunk = serde_json::from_str(&json).unwrap();
        assert_eq!(back, chunk);
    }

    #[test]
    fn test_optional_fields_omitted() {
        let chunk = Chunk {
            id: 1,
            content: "x".to_string(),
            word_count: 1,
            char_count: 1,
            pages: vec![1],
            element_ids: vec![],
            content_types: vec![],
            section: SectionContext::default(),
            structural_confidence: 0.5,
            links: ChunkLinks::default(),
            carryover_summary: None,
        };

        let json = serde_json::to_string(&chunk).unwrap();
        assert!(!json.contains("carryover_summary"));
        assert!(!json.contains("previous_chunk_id"));
        assert!(!json.contains("hierarchy_path"));
        assert!(json.contains("\"section_type\":\"general_content\""));
    }
}
