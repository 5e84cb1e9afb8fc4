//! Top-N sentence selection
//!
//! Pairs sentences with their centrality scores, sorts by descending
//! score, and keeps the top `max(1, floor(n * fraction))`, capped at `n`.

use std::cmp::Ordering;

use crate::types::{ScoredSentence, Sentence};

/// Select the top-ranked sentences for the summary.
///
/// The result stays in **rank order** (most central first), not original
/// document order. Restoring document order would read more naturally,
/// but rank order is the established output contract of this summarizer
/// and is kept deliberately.
///
/// Ties keep their original relative order (the sort is stable), so
/// repeated calls are reproducible. `fraction <= 0` (or NaN) still
/// yields one sentence; `fraction >= 1` yields all sentences reordered
/// by importance. An empty input yields an empty result.
pub fn select_top(sentences: &[Sentence], scores: &[f64], fraction: f64) -> Vec<ScoredSentence> {
    debug_assert_eq!(
        sentences.len(),
        scores.len(),
        "sentence/score length mismatch"
    );

    let n = sentences.len();
    if n == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<ScoredSentence> = sentences
        .iter()
        .zip(scores.iter())
        .map(|(sentence, &score)| ScoredSentence {
            index: sentence.index,
            text: sentence.text.clone(),
            score,
        })
        .collect();

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    // Saturating cast: negative or NaN fractions floor to 0, then the
    // minimum-1 rule applies.
    let count = ((n as f64 * fraction).floor() as usize).clamp(1, n);
    ranked.truncate(count);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_sentences(texts: &[&str]) -> Vec<Sentence> {
        texts
            .iter()
            .enumerate()
            .map(|(index, text)| Sentence {
                index,
                text: text.to_string(),
                normalized: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_rank_order_output() {
        let sentences = make_sentences(&["first", "second", "third", "fourth"]);
        let scores = [0.1, 0.4, 0.2, 0.3];

        let selected = select_top(&sentences, &scores, 0.5);

        // floor(4 * 0.5) = 2, highest scores first.
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].text, "second");
        assert_eq!(selected[1].text, "fourth");
    }

    #[test]
    fn test_minimum_one_sentence() {
        let sentences = make_sentences(&["a", "b", "c"]);
        let scores = [0.5, 0.3, 0.2];

        assert_eq!(select_top(&sentences, &scores, 0.01).len(), 1);
        assert_eq!(select_top(&sentences, &scores, 0.0).len(), 1);
        assert_eq!(select_top(&sentences, &scores, -1.0).len(), 1);
        assert_eq!(select_top(&sentences, &scores, f64::NAN).len(), 1);
    }

    #[test]
    fn test_fraction_one_returns_all_ranked() {
        let sentences = make_sentences(&["a", "b", "c"]);
        let scores = [0.2, 0.5, 0.3];

        let selected = select_top(&sentences, &scores, 1.0);
        assert_eq!(selected.len(), 3);
        let texts: Vec<_> = selected.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_fraction_above_one_capped() {
        let sentences = make_sentences(&["a", "b"]);
        let scores = [0.6, 0.4];

        assert_eq!(select_top(&sentences, &scores, 5.0).len(), 2);
    }

    #[test]
    fn test_floor_rounding() {
        let sentences = make_sentences(&["a", "b", "c", "d", "e"]);
        let scores = [0.3, 0.25, 0.2, 0.15, 0.1];

        // floor(5 * 0.5) = 2, not ceil's 3.
        assert_eq!(select_top(&sentences, &scores, 0.5).len(), 2);
        // floor(5 * 0.39) = 1.
        assert_eq!(select_top(&sentences, &scores, 0.39).len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let selected = select_top(&[], &[], 0.5);
        assert!(selected.is_empty());
    }

    #[test]
    fn test_stable_tie_break_keeps_document_order() {
        let sentences = make_sentences(&["a", "b", "c"]);
        let scores = [0.25, 0.5, 0.25];

        let selected = select_top(&sentences, &scores, 1.0);
        assert_eq!(selected[0].text, "b");
        // Equal scores: "a" precedes "c" as in the document.
        assert_eq!(selected[1].text, "a");
        assert_eq!(selected[2].text, "c");
    }

    #[test]
    fn test_scores_and_indices_carried() {
        let sentences = make_sentences(&["a", "b"]);
        let scores = [0.3, 0.7];

        let selected = select_top(&sentences, &scores, 1.0);
        assert_eq!(selected[0].index, 1);
        assert!((selected[0].score - 0.7).abs() < 1e-12);
    }
}
