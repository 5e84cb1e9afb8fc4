//! Sparse term-frequency vectors
//!
//! Each sentence is tokenized once into a term-frequency map with a
//! precomputed L2 norm; cosine similarity is then a sparse dot product
//! over the smaller map. This avoids rebuilding a per-pair vocabulary
//! for every one of the O(n²) sentence pairs.

use rustc_hash::FxHashMap;

/// A sparse bag-of-words vector with precomputed L2 norm.
#[derive(Debug, Clone, Default)]
pub struct TermVector {
    /// Term -> occurrence count.
    counts: FxHashMap<String, f64>,
    /// L2 norm of the counts.
    norm: f64,
}

impl TermVector {
    /// Build a vector from whitespace-separated terms of a cleaned
    /// sentence.
    pub fn from_text(text: &str) -> Self {
        Self::from_terms(text.split_whitespace())
    }

    /// Build a vector from an iterator of terms.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: FxHashMap<String, f64> = FxHashMap::default();
        for term in terms {
            *counts.entry(term.as_ref().to_string()).or_insert(0.0) += 1.0;
        }
        let norm = counts.values().map(|v| v * v).sum::<f64>().sqrt();
        Self { counts, norm }
    }

    /// Cosine similarity with another vector.
    ///
    /// A zero vector (fully filtered sentence) makes the cosine
    /// undefined (0/0); that case is defined as `0.0` here so NaN never
    /// escapes into the similarity matrix.
    pub fn cosine(&self, other: &TermVector) -> f64 {
        if self.norm == 0.0 || other.norm == 0.0 {
            return 0.0;
        }

        // Iterate the smaller map.
        let (a, b) = if self.counts.len() <= other.counts.len() {
            (self, other)
        } else {
            (other, self)
        };
        let dot: f64 = a
            .counts
            .iter()
            .filter_map(|(term, &count)| b.counts.get(term).map(|&c| count * c))
            .sum();

        dot / (self.norm * other.norm)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check whether the vector has no terms.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The vector's L2 norm.
    pub fn norm(&self) -> f64 {
        self.norm
    }
}

/// Cosine similarity between two cleaned sentences.
///
/// Commutative: `similarity(a, b)` and `similarity(b, a)` agree to
/// floating-point rounding.
pub fn similarity(a: &str, b: &str) -> f64 {
    TermVector::from_text(a).cosine(&TermVector::from_text(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_sentences() {
        let sim = similarity("cat sat mat", "cat sat mat");
        assert!((sim - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_disjoint_sentences() {
        let sim = similarity("cat sat mat", "weather sunny today");
        assert_eq!(sim, 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        // Vectors {cat, sat, mat} and {cat, dog, played} share one term:
        // 1 / (sqrt(3) * sqrt(3)) = 1/3.
        let sim = similarity("cat sat mat", "cat dog played");
        assert!((sim - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_term_counts_matter() {
        // "cat cat" = {cat: 2}, norm 2; "cat dog" = {cat: 1, dog: 1},
        // norm sqrt(2); dot = 2 -> 2 / (2 * sqrt(2)) = 1/sqrt(2).
        let sim = similarity("cat cat", "cat dog");
        assert!((sim - 1.0 / 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_zero_vector_is_zero_not_nan() {
        let sim = similarity("", "cat sat mat");
        assert_eq!(sim, 0.0);
        assert!(!sim.is_nan());

        let sim = similarity("", "");
        assert_eq!(sim, 0.0);
    }

    #[test]
    fn test_symmetry() {
        let a = "cat sat mat floor rug";
        let b = "dog cat rug park";
        let forward = similarity(a, b);
        let backward = similarity(b, a);
        assert!((forward - backward).abs() < 1e-15);
    }

    #[test]
    fn test_vector_accessors() {
        let v = TermVector::from_text("cat cat dog");
        assert_eq!(v.len(), 2);
        assert!(!v.is_empty());
        assert!((v.norm() - 5.0_f64.sqrt()).abs() < 1e-12);

        let empty = TermVector::from_text("");
        assert!(empty.is_empty());
        assert_eq!(empty.norm(), 0.0);
    }
}
