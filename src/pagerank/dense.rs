//! Dense weighted PageRank
//!
//! Power iteration with edge weights as transition probabilities and
//! proper handling of dangling nodes (rows with zero total weight).

use super::PageRankResult;
use crate::similarity::SimilarityMatrix;

/// PageRank over a dense weighted adjacency matrix.
#[derive(Debug, Clone)]
pub struct DensePageRank {
    /// Damping factor (typically 0.85).
    pub damping: f64,
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// Convergence threshold.
    pub threshold: f64,
}

impl Default for DensePageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
        }
    }
}

impl DensePageRank {
    /// Create a ranker with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run PageRank on the adjacency matrix.
    ///
    /// Returns the result even if convergence wasn't achieved, with
    /// `converged = false`. A single node scores 1.0 without iterating;
    /// an all-zero matrix yields the uniform distribution `1/n`.
    pub fn run(&self, matrix: &SimilarityMatrix) -> PageRankResult {
        let n = matrix.len();
        if n == 0 {
            return PageRankResult::new(vec![], 0, 0.0, true);
        }
        if n == 1 {
            return PageRankResult::new(vec![1.0], 0, 0.0, true);
        }

        // Total outgoing weight per node; zero marks a dangling node.
        let total_weight: Vec<f64> = (0..n).map(|i| matrix.row_sum(i)).collect();

        let initial_score = 1.0 / n as f64;
        let mut scores = vec![initial_score; n];
        let mut new_scores = vec![0.0; n];

        let teleport = (1.0 - self.damping) / n as f64;
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            // Dangling nodes spread their mass uniformly.
            let dangling_mass: f64 = scores
                .iter()
                .zip(total_weight.iter())
                .filter(|(_, &w)| w == 0.0)
                .map(|(&s, _)| s)
                .sum();
            let dangling_contribution = self.damping * dangling_mass / n as f64;

            new_scores.fill(teleport + dangling_contribution);

            // Propagate scores along weighted edges.
            for (i, &node_score) in scores.iter().enumerate() {
                if total_weight[i] > 0.0 {
                    let scale = self.damping * node_score / total_weight[i];
                    for (j, &weight) in matrix.row(i).iter().enumerate() {
                        if weight > 0.0 {
                            new_scores[j] += scale * weight;
                        }
                    }
                }
            }

            // L1 convergence delta.
            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);
        }

        // Scores already sum to ~1; renormalize for numerical stability.
        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        PageRankResult::new(scores, iterations, delta, delta <= self.threshold)
    }
}
