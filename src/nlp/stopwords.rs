//! Stopword filtering
//!
//! Bundled stopword lists come from the `stop-words` crate; custom lists
//! can be supplied inline or loaded from a file. Loading happens once at
//! construction — the filter is immutable state passed into the pipeline,
//! never fetched lazily mid-call.

use std::path::Path;

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::error::SummarizeError;

/// A set of stopwords to discard during normalization.
///
/// Lookups are case-insensitive; the set stores lower-cased words.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    /// Create a filter with the bundled English stopword list.
    pub fn english() -> Self {
        Self {
            stopwords: collect(LANGUAGE::English),
        }
    }

    /// Create a filter for the given language code.
    ///
    /// Returns [`SummarizeError::UnsupportedLanguage`] when no list is
    /// bundled for the code.
    pub fn for_language(language: &str) -> Result<Self, SummarizeError> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "ru" | "russian" => LANGUAGE::Russian,
            other => return Err(SummarizeError::UnsupportedLanguage(other.to_string())),
        };
        Ok(Self {
            stopwords: collect(lang),
        })
    }

    /// Create an empty filter (no words removed).
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a filter from a custom word list.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Load a filter from a file with one stopword per line.
    ///
    /// Blank lines and `#` comments are skipped. I/O failures surface as
    /// [`SummarizeError::ResourceUnavailable`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SummarizeError> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| SummarizeError::ResourceUnavailable {
                resource: path.display().to_string(),
                reason: e.to_string(),
            })?;

        let stopwords = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();

        Ok(Self { stopwords })
    }

    /// Add extra stopwords to the filter.
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Check whether a word is a stopword.
    pub fn is_stopword(&self, word: &str) -> bool {
        // Fast path: normalized input is already lower-case.
        self.stopwords.contains(word)
            || word.chars().any(char::is_uppercase) && self.stopwords.contains(&word.to_lowercase())
    }

    /// Number of words in the filter.
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check whether the filter is empty.
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

fn collect(lang: LANGUAGE) -> FxHashSet<String> {
    get(lang).iter().map(|s| s.to_string()).collect()
}
