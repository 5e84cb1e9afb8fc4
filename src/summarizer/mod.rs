//! Summarization pipeline orchestration
//!
//! The [`Summarizer`] bundles the language resources (segmenter,
//! stopword-backed normalizer) and ranking configuration into one
//! immutable value, constructed once and reused across calls. Each call
//! owns its own sentences, similarity matrix, and score vector — nothing
//! is shared or cached between invocations, so a single `Summarizer` can
//! serve concurrent callers.

pub mod selector;

pub use selector::select_top;

use crate::error::SummarizeError;
use crate::nlp::normalizer::Normalizer;
use crate::nlp::segmenter::SentenceSegmenter;
use crate::nlp::stopwords::StopwordFilter;
use crate::pagerank::DensePageRank;
use crate::similarity::{SimilarityMatrix, TermVector};
use crate::types::{ScoredSentence, Sentence, SummaryConfig};

/// Enter a tracing span for a pipeline stage (when the `tracing` feature
/// is enabled). When disabled, this is a no-op and the compiler
/// eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("summarize_stage", stage = $name).entered();
    };
}

/// Extractive summarizer over a sentence-similarity graph.
///
/// The pipeline per call: segment into sentences, normalize a copy of
/// each, build the pairwise cosine-similarity matrix, rank sentences by
/// PageRank centrality, and select the top fraction in rank order.
///
/// # Examples
///
/// ```
/// use sentrank::Summarizer;
///
/// let summarizer = Summarizer::new().unwrap();
/// let summary = summarizer.summarize(
///     "The cat sat on the mat. The dog ran in the park. \
///      The cat and dog played together. Weather was sunny today.",
///     0.5,
/// );
/// assert_eq!(summary.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Summarizer {
    segmenter: SentenceSegmenter,
    normalizer: Normalizer,
    config: SummaryConfig,
}

impl Summarizer {
    /// Create a summarizer with English resources and default config.
    ///
    /// Resource acquisition is the only failure path of the whole
    /// pipeline; once constructed, summarization itself cannot fail.
    pub fn new() -> Result<Self, SummarizeError> {
        Self::with_config(SummaryConfig::default())
    }

    /// Create a summarizer from a config, loading the stopword list for
    /// `config.language`.
    pub fn with_config(config: SummaryConfig) -> Result<Self, SummarizeError> {
        let stopwords = StopwordFilter::for_language(&config.language)?;
        Ok(Self {
            segmenter: SentenceSegmenter::english(),
            normalizer: Normalizer::new(stopwords),
            config,
        })
    }

    /// Create a summarizer for a language, with default ranking config.
    ///
    /// `language` is an ISO 639-1 code; unsupported codes fail with
    /// [`SummarizeError::UnsupportedLanguage`].
    pub fn for_language(language: &str) -> Result<Self, SummarizeError> {
        Self::with_config(SummaryConfig::new().with_language(language))
    }

    /// Create a summarizer from explicit resources.
    ///
    /// Useful for custom stopword lists or abbreviation sets; no
    /// bundled data is touched.
    pub fn with_resources(
        segmenter: SentenceSegmenter,
        stopwords: StopwordFilter,
        config: SummaryConfig,
    ) -> Self {
        Self {
            segmenter,
            normalizer: Normalizer::new(stopwords),
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Summarize `text`, keeping roughly `fraction` of its sentences.
    ///
    /// Returns the selected sentences verbatim, in descending-importance
    /// order. Empty or whitespace-only input yields an empty vec; any
    /// non-empty input yields at least one sentence regardless of how
    /// small `fraction` is.
    pub fn summarize(&self, text: &str, fraction: f64) -> Vec<String> {
        self.summarize_scored(text, fraction)
            .into_iter()
            .map(|s| s.text)
            .collect()
    }

    /// Like [`summarize`](Self::summarize), but keeps each sentence's
    /// centrality score and original document index.
    pub fn summarize_scored(&self, text: &str, fraction: f64) -> Vec<ScoredSentence> {
        trace_stage!("segment");
        let (sentences, vectors) = self.segment_and_normalize(text);
        if sentences.is_empty() {
            return Vec::new();
        }

        trace_stage!("similarity");
        let matrix = SimilarityMatrix::from_vectors(vectors);
        debug_assert_eq!(matrix.len(), sentences.len());

        trace_stage!("rank");
        let ranker = DensePageRank::new()
            .with_damping(self.config.damping)
            .with_max_iterations(self.config.max_iterations)
            .with_threshold(self.config.threshold);
        let result = ranker.run(&matrix);
        debug_assert_eq!(result.scores.len(), sentences.len());

        trace_stage!("select");
        select_top(&sentences, &result.scores, fraction)
    }

    /// Segment the text and tokenize each sentence once, yielding both
    /// the sentence records and their term vectors.
    fn segment_and_normalize(&self, text: &str) -> (Vec<Sentence>, Vec<TermVector>) {
        self.segmenter
            .segment(text)
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                let tokens = self.normalizer.surviving_tokens(&text);
                let vector = TermVector::from_terms(&tokens);
                let sentence = Sentence {
                    index,
                    text,
                    normalized: tokens.join(" "),
                };
                (sentence, vector)
            })
            .unzip()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOUR_SENTENCES: &str = "The cat sat on the mat. The dog ran in the park. \
                                  The cat and dog played together. Weather was sunny today.";

    fn summarizer() -> Summarizer {
        Summarizer::new().unwrap()
    }

    #[test]
    fn test_summarize_half() {
        let summary = summarizer().summarize(FOUR_SENTENCES, 0.5);
        assert_eq!(summary.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(summarizer().summarize("", 0.5).is_empty());
        assert!(summarizer().summarize("   \n  ", 0.5).is_empty());
    }

    #[test]
    fn test_single_sentence_input() {
        let summary = summarizer().summarize("Only one sentence here.", 0.5);
        assert_eq!(summary, vec!["Only one sentence here."]);
    }

    #[test]
    fn test_scored_output_carries_indices() {
        let scored = summarizer().summarize_scored(FOUR_SENTENCES, 1.0);
        assert_eq!(scored.len(), 4);

        let mut indices: Vec<_> = scored.iter().map(|s| s.index).collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 1, 2, 3]);

        let total: f64 = scored.iter().map(|s| s.score).sum();
        assert!((total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_fully_stopword_sentence_is_handled() {
        // The middle sentence normalizes to the empty string; it must
        // contribute a zero vector, not break the pipeline.
        let text = "The cat sat on the mat. It is what it is. The cat played again.";
        let summary = summarizer().summarize(text, 1.0);
        assert_eq!(summary.len(), 3);
    }

    #[test]
    fn test_custom_resources() {
        let s = Summarizer::with_resources(
            SentenceSegmenter::english(),
            StopwordFilter::from_list(&["the", "a"]),
            SummaryConfig::default(),
        );
        let summary = s.summarize("The cat sat. The cat ran.", 0.5);
        assert_eq!(summary.len(), 1);
    }

    #[test]
    fn test_for_language() {
        let s = Summarizer::for_language("de").unwrap();
        assert_eq!(s.config().language, "de");
        assert!(Summarizer::for_language("xx").is_err());
    }

    #[test]
    fn test_unsupported_language_fails_at_construction() {
        let err = Summarizer::with_config(SummaryConfig::new().with_language("xx"));
        assert!(err.is_err());
    }
}
