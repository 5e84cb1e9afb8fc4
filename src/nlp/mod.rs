//! Natural Language Processing components
//!
//! This module provides sentence segmentation, word tokenization,
//! stopword filtering, and sentence normalization.

pub mod normalizer;
pub mod segmenter;
pub mod stopwords;
pub mod tokenizer;
