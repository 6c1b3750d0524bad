//! Error types for document extraction and chunking operations.
//!
//! This module defines the error types that can occur while extracting
//! elements, building chunks, or looking up fund metadata, and provides a
//! `Result` alias used across the workspace.

use thiserror::Error;

/// Error types that can occur during extraction and chunking.
///
/// Recoverable conditions (a page that fails to extract, an unreachable
/// fund store) are absorbed close to where they happen and surfaced as
/// partial-result markers in the output; the variants here represent
/// conditions the caller has to deal with.
///
/// # Examples
///
/// ```rust
/// use fundchunk_core::{FundchunkError, Result};
///
/// fn read_config(path: &str) -> Result<String> {
///     Ok(std::fs::read_to_string(path)?)
/// }
///
/// match read_config("/does/not/exist") {
///     Err(FundchunkError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
///     other => panic!("expected IO error, got {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum FundchunkError {
    /// File I/O error.
    ///
    /// Reading the input document or writing the serialized output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    ///
    /// Raised when the structured-element import file cannot be parsed or
    /// the extraction output cannot be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Document extraction error.
    ///
    /// The source document could not be opened or parsed at all. Per-page
    /// failures are *not* reported through this variant; they degrade to
    /// empty pages.
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// Fund metadata store error.
    ///
    /// The relational store could not be opened or queried. Callers
    /// attaching fund metadata absorb this into an `Unavailable` marker.
    #[error("Store error: {0}")]
    Store(String),

    /// Invalid caller-supplied input (bad path, malformed argument).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Type alias for [`Result<T, FundchunkError>`].
pub type Result<T> = std::result::Result<T, FundchunkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_error_display() {
        let error = FundchunkError::Extraction("failed to load PDF".to_string());
        assert_eq!(format!("{error}"), "Extraction error: failed to load PDF");
    }

    #[test]
    fn test_store_error_display() {
        let error = FundchunkError::Store("no such table: fund_mapping".to_string());
        let display = format!("{error}");
        assert!(display.starts_with("Store error:"));
        assert!(display.contains("fund_mapping"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FundchunkError = io_err.into();

        match err {
            FundchunkError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ not json }").unwrap_err();
        let err: FundchunkError = json_err.into();

        match err {
            FundchunkError::Json(e) => assert!(!e.to_string().is_empty()),
            _ => panic!("Expected Json variant"),
        }
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn inner() -> Result<()> {
            Err(FundchunkError::InvalidInput("bad map id".to_string()))
        }

        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }

        match outer() {
            Err(FundchunkError::InvalidInput(msg)) => assert_eq!(msg, "bad map id"),
            _ => panic!("Expected InvalidInput to propagate"),
        }
    }

    #[test]
    fn test_error_size() {
        // Errors are passed by value a lot; keep them small enough that
        // boxing is not needed.
        assert!(std::mem::size_of::<FundchunkError>() < 256);
    }
}
