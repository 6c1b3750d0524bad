//! Core trait and options for document sources

use crate::types::ParsedDocument;
use fundchunk_core::Result;
use std::path::Path;

/// Options for page element extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Keep page-number-only blocks as zero-confidence labels instead of
    /// dropping them
    pub keep_page_numbers: bool,

    /// Run the noise-cleaning pass over block text before typing
    pub clean_text: bool,

    /// Blocks shorter than this after trimming are discarded
    pub min_block_len: usize,
}

impl ExtractOptions {
    /// Keep page-number-only blocks as labels.
    #[inline]
    #[must_use = "returns options with the page-number setting configured"]
    pub const fn with_keep_page_numbers(mut self, keep: bool) -> Self {
        self.keep_page_numbers = keep;
        self
    }

    /// Enable or disable the text-cleaning pass.
    #[inline]
    #[must_use = "returns options with the cleaning setting configured"]
    pub const fn with_clean_text(mut self, clean: bool) -> Self {
        self.clean_text = clean;
        self
    }

    /// Set the minimum block length.
    #[inline]
    #[must_use = "returns options with the minimum block length configured"]
    pub const fn with_min_block_len(mut self, len: usize) -> Self {
        self.min_block_len = len;
        self
    }
}

impl Default for ExtractOptions {
    #[inline]
    fn default() -> Self {
        Self {
            keep_page_numbers: false,
            clean_text: true,
            min_block_len: 3,
        }
    }
}

/// A parser that turns a document file into ordered raw pages.
///
/// Implementations own all byte-level parsing. Per-page failures must be
/// absorbed (logged, degraded to an empty page); only a document that
/// cannot be opened at all is an error.
pub trait DocumentSource {
    /// Parse a document from a file path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a document
    /// this source understands.
    fn parse_file(&self, path: &Path) -> Result<ParsedDocument>;
}
