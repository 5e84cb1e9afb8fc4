//! Graph-centrality ranking
//!
//! PageRank by power iteration over the dense weighted adjacency matrix.
//! The sentence graph is complete and dense, so iterating the matrix
//! directly is cheaper than building a general sparse-graph abstraction.

pub mod dense;

pub use dense::DensePageRank;

/// Result of a PageRank computation.
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Scores for each node, non-negative, summing to 1.
    pub scores: Vec<f64>,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Final convergence delta (L1 norm of the last update).
    pub delta: f64,
    /// Whether the iteration converged within the threshold.
    pub converged: bool,
}

impl PageRankResult {
    /// Create a new PageRank result.
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Get top N nodes by score, descending.
    pub fn top_n(&self, n: usize) -> Vec<(usize, f64)> {
        let mut indexed: Vec<_> = self.scores.iter().copied().enumerate().collect();
        indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        indexed.truncate(n);
        indexed
    }

    /// Get the score for a specific node.
    pub fn score(&self, node: usize) -> f64 {
        self.scores.get(node).copied().unwrap_or(0.0)
    }
}
