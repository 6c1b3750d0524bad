//! # Fundchunk Backend
//!
//! Document sources and page element extraction for fundchunk. This crate
//! owns the boundary to the byte-level world: the PDF source (`lopdf`), the
//! structured-element import from an external converter, and the heuristics
//! that turn raw text blocks into typed [`Element`](fundchunk_core::Element)
//! sequences.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use fundchunk_backend::{DocumentSource, ExtractOptions, PdfSource, Pipeline};
//! use fundchunk_core::{ChunkerConfig, FundLookup};
//!
//! fn main() -> fundchunk_core::Result<()> {
//!     let source = PdfSource::new();
//!     let document = source.parse_file(Path::new("offering.pdf"))?;
//!
//!     let pipeline = Pipeline::new(ChunkerConfig::default(), ExtractOptions::default());
//!     let output = pipeline.run(
//!         &document,
//!         Path::new("offering.pdf"),
//!         None,
//!         FundLookup::unavailable("lookup skipped"),
//!     )?;
//!
//!     println!("{} chunks", output.statistics.total_chunks);
//!     Ok(())
//! }
//! ```

pub mod charts;
pub mod clean;
pub mod extractor;
pub mod fund_id;
pub mod import;
pub mod pdf;
pub mod pipeline;
pub mod traits;
pub mod types;
pub mod typing;

pub use charts::{chart_confidence, chart_score, classify_image, ChartConfidence, ImageKind, PageVisualStats};
pub use extractor::PageElementExtractor;
pub use fund_id::detect_fund_identifier;
pub use import::StructuredSource;
pub use pdf::PdfSource;
pub use pipeline::Pipeline;
pub use traits::{DocumentSource, ExtractOptions};
pub use types::{FontHints, ParsedDocument, RawBlock, RawPage, SourceMetadata};
