//! Word tokenization
//!
//! Unicode word-boundary segmentation (UAX #29). Unlike a naive
//! whitespace split, this separates punctuation from words, so
//! `"stop."` yields `["stop", "."]` and the punctuation token can be
//! filtered downstream.

use unicode_segmentation::UnicodeSegmentation;

/// Split text into word tokens at Unicode word boundaries.
///
/// Whitespace segments are dropped; punctuation survives as standalone
/// tokens. No case folding is applied here.
pub fn word_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_word_bounds()
        .filter(|segment| !segment.chars().all(char::is_whitespace))
}

/// Check whether a token consists solely of punctuation characters
/// (no alphanumeric content).
pub fn is_punctuation(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| !c.is_alphanumeric())
}
