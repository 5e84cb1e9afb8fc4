//! Core data types shared across pipeline stages.

use serde::{Deserialize, Serialize};

/// A segmented sentence with its normalized form.
///
/// `text` is the verbatim surface text as produced by the segmenter and is
/// what ends up in the summary. `normalized` is the lower-cased,
/// stopword/punctuation-filtered copy used only for similarity scoring —
/// it may be empty when every token was filtered, which is valid and
/// contributes a zero vector downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// Position in the original document, 0-based.
    pub index: usize,
    /// Verbatim surface text.
    pub text: String,
    /// Cleaned text for similarity scoring.
    pub normalized: String,
}

/// A sentence paired with its centrality score, as returned by the selector.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence {
    /// Position in the original document, 0-based.
    pub index: usize,
    /// Verbatim surface text.
    pub text: String,
    /// Centrality score assigned by the ranker.
    pub score: f64,
}

/// Configuration for the summarization pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// PageRank damping factor.
    #[serde(default = "default_damping")]
    pub damping: f64,

    /// Maximum power-iteration count before giving up on convergence.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// L1 convergence threshold for power iteration.
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Stopword language code (e.g. `"en"`).
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_damping() -> f64 {
    0.85
}

fn default_max_iterations() -> usize {
    100
}

fn default_threshold() -> f64 {
    1e-6
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            max_iterations: default_max_iterations(),
            threshold: default_threshold(),
            language: default_language(),
        }
    }
}

impl SummaryConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the PageRank damping factor.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iteration count.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the stopword language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

/// JSON request shape accepted by service frontends.
///
/// The HTTP layer itself lives outside this crate; these types are the
/// stable wire contract it serializes against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    /// Raw input text.
    pub text: String,
    /// Target fraction of sentences to keep, in `(0, 1]`.
    #[serde(default = "default_percentage")]
    pub percentage: f64,
}

fn default_percentage() -> f64 {
    0.5
}

/// JSON response shape produced by service frontends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeResponse {
    /// Selected sentences in descending-importance order.
    pub summary: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let cfg = SummaryConfig::default();
        assert!((cfg.damping - 0.85).abs() < 1e-12);
        assert_eq!(cfg.max_iterations, 100);
        assert_eq!(cfg.language, "en");
    }

    #[test]
    fn test_config_builders() {
        let cfg = SummaryConfig::new()
            .with_damping(0.7)
            .with_max_iterations(50)
            .with_language("de");
        assert!((cfg.damping - 0.7).abs() < 1e-12);
        assert_eq!(cfg.max_iterations, 50);
        assert_eq!(cfg.language, "de");
    }

    #[test]
    fn test_config_deserialize_partial() {
        let cfg: SummaryConfig = serde_json::from_str(r#"{ "damping": 0.9 }"#).unwrap();
        assert!((cfg.damping - 0.9).abs() < 1e-12);
        // Omitted fields fall back to defaults.
        assert_eq!(cfg.max_iterations, 100);
        assert!((cfg.threshold - 1e-6).abs() < 1e-18);
    }

    #[test]
    fn test_request_default_percentage() {
        let req: SummarizeRequest =
            serde_json::from_str(r#"{ "text": "Some text." }"#).unwrap();
        assert!((req.percentage - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_response_roundtrip() {
        let resp = SummarizeResponse {
            summary: vec!["First.".to_string(), "Second.".to_string()],
        };
        let json = serde_json::to_string(&resp).unwrap();
        let back: SummarizeResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back.summary, resp.summary);
    }
}
