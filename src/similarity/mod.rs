//! Pairwise sentence similarity
//!
//! Bag-of-words cosine similarity between cleaned sentences, and the
//! dense symmetric matrix the ranker consumes.

pub mod matrix;
pub mod vector;

pub use matrix::SimilarityMatrix;
pub use vector::{similarity, TermVector};
