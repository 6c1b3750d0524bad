//! End-to-end document pipeline
//!
//! Ties a parsed document, the element extractor, the section outline, the
//! chunk builder and the fund lookup result into one serialized output
//! record. Strictly sequential; the fund lookup outcome is attached as-is
//! and never influences chunk computation.

use crate::charts::{accumulate_text, chart_score, PageVisualStats};
use crate::extractor::PageElementExtractor;
use crate::import::StructuredSource;
use crate::traits::ExtractOptions;
use crate::types::ParsedDocument;
use fundchunk_core::{
    ChunkBuilder, ChunkerConfig, DocumentInfo, Element, ElementType, ExtractionConfigInfo,
    ExtractionOutput, FundLookup, Result, SectionOutline, Statistics,
};
use std::collections::BTreeMap;
use std::path::Path;

/// Chart score at or above which a page is reported as chart-likely.
const CHART_PAGE_THRESHOLD: f32 = 0.4;

/// Pipeline configuration: chunking plus extraction options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pipeline {
    chunker: ChunkerConfig,
    extract: ExtractOptions,
}

impl Pipeline {
    /// Create a pipeline with the given configurations.
    #[inline]
    #[must_use = "constructors return a new pipeline"]
    pub const fn new(chunker: ChunkerConfig, extract: ExtractOptions) -> Self {
        Self { chunker, extract }
    }

    /// Run the pipeline over an already-parsed document.
    ///
    /// `structure` optionally points at an external structural element dump;
    /// when it loads and is non-empty it replaces the page-scan element
    /// sequence, and when it fails to load the page scan is used with a
    /// warning (the run continues).
    ///
    /// # Errors
    /// Only output assembly can fail here; per-page and import problems are
    /// absorbed.
    pub fn run(
        &self,
        document: &ParsedDocument,
        source_path: &Path,
        structure: Option<&Path>,
        fund: FundLookup,
    ) -> Result<ExtractionOutput> {
        let (elements, structured_used) = self.gather_elements(document, structure);
        log::info!("{} elements extracted", elements.len());

        let outline = SectionOutline::from_elements(&elements);
        let chunks = ChunkBuilder::new(self.chunker).build(&elements, &outline);
        log::info!(
            "{} chunks built across {} sections",
            chunks.len(),
            outline.len()
        );

        let mut statistics = Statistics::compute(&chunks, &outline);
        statistics.likely_chart_pages = chart_pages(&elements);

        let filename = source_path
            .file_name()
            .map_or_else(|| source_path.display().to_string(), |n| n.to_string_lossy().into_owned());

        let document_info = DocumentInfo {
            filename,
            source_path: source_path.display().to_string(),
            total_pages: document.metadata.page_count.max(document.pages.len()),
            title: document.metadata.title.clone(),
            author: document.metadata.author.clone(),
            subject: document.metadata.subject.clone(),
            created: document.metadata.created.clone(),
            modified: document.metadata.modified.clone(),
            fund,
            extraction_config: ExtractionConfigInfo::from_config(
                self.chunker,
                structured_used,
                self.extract.keep_page_numbers,
            ),
        };

        Ok(ExtractionOutput {
            document_info,
            document_structure: outline.into_sections(),
            content_chunks: chunks,
            statistics,
        })
    }

    /// Pick the element sequence: structured import when available,
    /// otherwise the page scan.
    fn gather_elements(
        &self,
        document: &ParsedDocument,
        structure: Option<&Path>,
    ) -> (Vec<Element>, bool) {
        if let Some(path) = structure {
            match StructuredSource::load_elements(path) {
                Ok(elements) if !elements.is_empty() => return (elements, true),
                Ok(_) => {
                    log::warn!("structured import {} was empty, falling back to page scan", path.display());
                }
                Err(e) => {
                    log::warn!("structured import failed ({e}), falling back to page scan");
                }
            }
        }

        let extractor = PageElementExtractor::new(self.extract);
        (extractor.extract_document(document), false)
    }
}

/// Pages whose element-derived visual stats score as chart-likely.
fn chart_pages(elements: &[Element]) -> Vec<u32> {
    let mut per_page: BTreeMap<u32, PageVisualStats> = BTreeMap::new();
    for element in elements {
        let stats = per_page.entry(element.page).or_default();
        if element.element_type == ElementType::Image {
            stats.image_count += 1;
        } else {
            accumulate_text(stats, &element.content);
        }
    }

    per_page
        .into_iter()
        .filter(|(_, stats)| chart_score(stats) >= CHART_PAGE_THRESHOLD)
        .map(|(page, _)| page)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RawBlock, RawPage};

    fn sample_document() -> ParsedDocument {
        ParsedDocument::from_pages(vec![
            RawPage {
                number: 1,
                blocks: vec![
                    RawBlock::text_only("RISK FACTORS"),
                    RawBlock::text_only(
                        "An investment in the fund involves a substantial degree of risk and \
                         prospective investors should review the warning notices carefully \
                         before committing capital to any share class offered.",
                    ),
                ],
            },
            RawPage {
                number: 2,
                blocks: vec![RawBlock::text_only(
                    "Redemptions are processed quarterly with ninety days written notice to \
                     the administrator, subject to gates described later in this memorandum.",
                )],
            },
        ])
    }

    #[test]
    fn test_run_produces_chunks_sections_and_statistics() {
        let pipeline = Pipeline::default();
        let output = pipeline
            .run(
                &sample_document(),
                Path::new("/docs/offering.pdf"),
                None,
                FundLookup::unavailable("fund database not configured"),
            )
            .unwrap();

        assert_eq!(output.document_info.filename, "offering.pdf");
        assert_eq!(output.document_info.total_pages, 2);
        assert!(!output.content_chunks.is_empty());
        assert_eq!(output.statistics.total_chunks, output.content_chunks.len());
        assert_eq!(output.document_structure.len(), 1);
        assert_eq!(output.document_structure[0].title, "RISK FACTORS");
        assert!(!output.document_info.extraction_config.structured_input_used);
        assert!(!output.document_info.fund.is_found());
    }

    #[test]
    fn test_structured_import_replaces_page_scan() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("structure.json");
        std::fs::write(
            &path,
            r#"[
                {"type": "title", "content": "FEES AND EXPENSES", "page": 1},
                {"type": "paragraph", "content": "A management fee of 1.5% per annum accrues daily on net assets.", "page": 1}
            ]"#,
        )
        .unwrap();

        let pipeline = Pipeline::default();
        let output = pipeline
            .run(
                &sample_document(),
                Path::new("/docs/offering.pdf"),
                Some(&path),
                FundLookup::unavailable("skipped"),
            )
            .unwrap();

        assert!(output.document_info.extraction_config.structured_input_used);
        assert_eq!(output.document_structure[0].title, "FEES AND EXPENSES");
        // Page-scan content is fully replaced
        assert!(output
            .content_chunks
            .iter()
            .all(|c| !c.content.contains("Redemptions")));
    }

    #[test]
    fn test_broken_structured_import_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("structure.json");
        std::fs::write(&path, "{ broken json").unwrap();

        let pipeline = Pipeline::default();
        let output = pipeline
            .run(
                &sample_document(),
                Path::new("/docs/offering.pdf"),
                Some(&path),
                FundLookup::unavailable("skipped"),
            )
            .unwrap();

        assert!(!output.document_info.extraction_config.structured_input_used);
        assert_eq!(output.document_structure[0].title, "RISK FACTORS");
    }

    #[test]
    fn test_chart_pages_flagged_from_image_elements() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("structure.json");
        std::fs::write(
            &path,
            r#"[
                {"type": "paragraph", "content": "A full page of running prose that keeps going with plenty of ordinary words and no figures at all, describing the strategy in general terms for the reader.", "page": 1},
                {"type": "figure", "content": "NAV growth chart", "page": 2},
                {"type": "table", "content": "2019 2020 2021 2022 12.5% 8.1%", "page": 2}
            ]"#,
        )
        .unwrap();

        let pipeline = Pipeline::default();
        let output = pipeline
            .run(
                &sample_document(),
                Path::new("/docs/offering.pdf"),
                Some(&path),
                FundLookup::unavailable("skipped"),
            )
            .unwrap();

        assert_eq!(output.statistics.likely_chart_pages, vec![2]);
    }

    #[test]
    fn test_empty_document_yields_empty_output() {
        let pipeline = Pipeline::default();
        let output = pipeline
            .run(
                &ParsedDocument::default(),
                Path::new("empty.pdf"),
                None,
                FundLookup::unavailable("skipped"),
            )
            .unwrap();

        assert!(output.content_chunks.is_empty());
        assert!(output.document_structure.is_empty());
        assert_eq!(output.statistics.total_chunks, 0);
    }
}
