//! # sentrank
//!
//! Fast extractive text summarization. Sentences become nodes in a
//! weighted undirected graph whose edges are bag-of-words cosine
//! similarities; PageRank centrality then scores each sentence by how
//! strongly the other sentences "agree" with it, recursively weighted by
//! their own importance. The top-ranked sentences are returned verbatim.
//!
//! The pipeline is strictly sequential and purely functional per call:
//!
//! 1. **Segment** the text into sentences (surface text preserved).
//! 2. **Normalize** a copy of each: lower-case, tokenize at Unicode word
//!    boundaries, drop stopwords and punctuation.
//! 3. **Similarity**: dense symmetric cosine-similarity matrix with zero
//!    diagonal, from per-sentence term-frequency vectors built once.
//! 4. **Rank**: weighted PageRank by power iteration over the matrix.
//! 5. **Select** the top `max(1, floor(n * fraction))` sentences, in
//!    descending-importance order.
//!
//! # Quick start
//!
//! ```
//! let summary = sentrank::summarize(
//!     "The cat sat on the mat. The dog ran in the park. \
//!      The cat and dog played together. Weather was sunny today.",
//!     0.5,
//! )
//! .unwrap();
//!
//! assert_eq!(summary.len(), 2);
//! assert_eq!(summary[0], "The cat and dog played together.");
//! ```
//!
//! For repeated calls, build a [`Summarizer`] once — it holds the
//! stopword list and segmenter as immutable state and is cheap to share
//! across threads:
//!
//! ```
//! use sentrank::{Summarizer, SummaryConfig};
//!
//! let summarizer = Summarizer::with_config(
//!     SummaryConfig::new().with_damping(0.85),
//! )
//! .unwrap();
//! let summary = summarizer.summarize("One sentence. Another sentence.", 1.0);
//! assert_eq!(summary.len(), 2);
//! ```

pub mod error;
pub mod nlp;
pub mod pagerank;
pub mod similarity;
pub mod summarizer;
pub mod types;

pub use error::SummarizeError;
pub use nlp::normalizer::Normalizer;
pub use nlp::segmenter::SentenceSegmenter;
pub use nlp::stopwords::StopwordFilter;
pub use pagerank::{DensePageRank, PageRankResult};
pub use similarity::{similarity, SimilarityMatrix, TermVector};
pub use summarizer::{select_top, Summarizer};
pub use types::{
    ScoredSentence, Sentence, SummarizeRequest, SummarizeResponse, SummaryConfig,
};

/// Summarize `text`, keeping roughly `fraction` of its sentences.
///
/// Convenience wrapper that builds an English [`Summarizer`] with default
/// settings for a single call. Returns the selected sentences verbatim,
/// most central first. Fails only if language resources cannot be
/// acquired; empty input yields `Ok` with an empty vec.
pub fn summarize(text: &str, fraction: f64) -> Result<Vec<String>, SummarizeError> {
    Ok(Summarizer::new()?.summarize(text, fraction))
}
