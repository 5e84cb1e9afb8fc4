//! Sentence normalization
//!
//! Produces the cleaned form of a sentence used for similarity scoring:
//! lower-cased, word-tokenized, with stopwords and punctuation-only
//! tokens removed. The original surface text is never touched.

use super::stopwords::StopwordFilter;
use super::tokenizer::{is_punctuation, word_tokens};

/// Normalizes sentences for similarity computation.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    stopwords: StopwordFilter,
}

impl Normalizer {
    /// Create a normalizer with the given stopword filter.
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }

    /// Create a normalizer with the bundled English stopword list.
    pub fn english() -> Self {
        Self::new(StopwordFilter::english())
    }

    /// Normalize a sentence: lower-case, tokenize, drop stopword and
    /// punctuation tokens, rejoin with single spaces.
    ///
    /// The result may be empty when every token was filtered; an empty
    /// string contributes a zero vector to similarity scoring, which is
    /// valid and never an error.
    pub fn normalize(&self, sentence: &str) -> String {
        self.surviving_tokens(sentence).join(" ")
    }

    /// The tokens that survive filtering, in order.
    pub fn surviving_tokens(&self, sentence: &str) -> Vec<String> {
        let lowered = sentence.to_lowercase();
        word_tokens(&lowered)
            .filter(|t| !is_punctuation(t) && !self.stopwords.is_stopword(t))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_filters() {
        let norm = Normalizer::new(StopwordFilter::from_list(&["the", "on"]));
        assert_eq!(norm.normalize("The CAT sat on the mat."), "cat sat mat");
    }

    #[test]
    fn test_english_stopwords_dropped() {
        let norm = Normalizer::english();
        let out = norm.normalize("The cat and the dog.");
        assert_eq!(out, "cat dog");
    }

    #[test]
    fn test_punctuation_removed() {
        let norm = Normalizer::english();
        let out = norm.normalize("Cats, dogs; birds!");
        assert_eq!(out, "cats dogs birds");
    }

    #[test]
    fn test_all_tokens_filtered_is_empty() {
        let norm = Normalizer::english();
        // Every token is a stopword or punctuation.
        assert_eq!(norm.normalize("It is, and the..."), "");
    }

    #[test]
    fn test_empty_input() {
        let norm = Normalizer::english();
        assert_eq!(norm.normalize(""), "");
    }

    #[test]
    fn test_token_order_preserved() {
        let norm = Normalizer::new(StopwordFilter::from_list(&["the"]));
        assert_eq!(
            norm.surviving_tokens("The dog chased the ball"),
            vec!["dog", "chased", "ball"]
        );
    }

    #[test]
    fn test_no_stopword_filtering_when_empty() {
        let norm = Normalizer::new(StopwordFilter::empty());
        assert_eq!(norm.normalize("The cat."), "the cat");
    }
}
