//! Error types for the summarization pipeline.
//!
//! The pipeline itself is pure and cannot fail on any input — empty or
//! trivially short text degrades to an empty or single-sentence result.
//! Errors only arise while acquiring language resources (stopword lists),
//! which happens once at [`Summarizer`](crate::Summarizer) construction.

use thiserror::Error;

/// Errors surfaced by resource acquisition.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// A required language resource could not be loaded.
    ///
    /// Raised for I/O failures on custom stopword files. Fatal to the
    /// call; retry policy belongs to the caller.
    #[error("language resource unavailable: {resource}: {reason}")]
    ResourceUnavailable { resource: String, reason: String },

    /// The requested stopword language is not bundled.
    #[error("unsupported stopword language: {0:?}")]
    UnsupportedLanguage(String),
}
