//! Dense similarity matrix construction
//!
//! The matrix is the weighted adjacency matrix of the sentence graph:
//! row-major `n × n`, symmetric, with an exactly-zero diagonal so
//! self-similarity never pollutes centrality. Rows are computed in
//! parallel for large documents and sequentially below a threshold,
//! with identical results either way.

use rayon::prelude::*;

use super::vector::TermVector;

/// Below this sentence count, parallel row construction costs more than
/// it saves.
const PARALLEL_THRESHOLD: usize = 64;

/// A dense symmetric sentence-similarity matrix with zero diagonal.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    n: usize,
    data: Vec<f64>,
}

impl SimilarityMatrix {
    /// Build the matrix from cleaned sentences.
    ///
    /// Each sentence is vectorized once; see [`from_vectors`](Self::from_vectors).
    pub fn from_sentences<S: AsRef<str> + Sync>(normalized: &[S]) -> Self {
        Self::from_vectors(
            normalized
                .iter()
                .map(|s| TermVector::from_text(s.as_ref()))
                .collect(),
        )
    }

    /// Build the matrix from prevectorized sentences.
    ///
    /// The upper triangle is computed and mirrored, so `get(i, j)` and
    /// `get(j, i)` are bit-identical.
    pub fn from_vectors(vectors: Vec<TermVector>) -> Self {
        let n = vectors.len();
        let mut data = vec![0.0; n * n];

        if n >= PARALLEL_THRESHOLD {
            // Rows are disjoint slices, so parallel fill is deterministic.
            data.par_chunks_mut(n).enumerate().for_each(|(i, row)| {
                for j in (i + 1)..n {
                    row[j] = vectors[i].cosine(&vectors[j]);
                }
            });
        } else {
            for i in 0..n {
                for j in (i + 1)..n {
                    data[i * n + j] = vectors[i].cosine(&vectors[j]);
                }
            }
        }

        // Mirror the upper triangle.
        for i in 0..n {
            for j in (i + 1)..n {
                data[j * n + i] = data[i * n + j];
            }
        }

        Self { n, data }
    }

    /// Matrix dimension (sentence count).
    pub fn len(&self) -> usize {
        self.n
    }

    /// Check whether the matrix is empty.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// The similarity between sentences `i` and `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Sum of row `i` — the node's total edge weight.
    pub fn row_sum(&self, i: usize) -> f64 {
        self.row(i).iter().sum()
    }
}
