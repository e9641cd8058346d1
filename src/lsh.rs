//! Approximate word matching via MinHash signatures and banded LSH.
//!
//! This module provides the sub-linear candidate retrieval layer of the
//! engine. Words are decomposed into character shingles ([`ngram`]), the
//! shingle set is summarized as a fixed-length [`minhash::MinHash`]
//! signature, and signatures are bucketed by an [`index::MinHashLsh`] so
//! that similar words collide with high probability.
//!
//! Candidates coming out of the index are approximate in both directions:
//! the union query can miss a truly similar word (a false negative of the
//! banding scheme) and routinely returns dissimilar ones. Callers apply an
//! exact filter, such as edit distance or a transposition check, before
//! trusting a candidate.

pub mod config;
pub mod index;
pub mod minhash;
pub mod ngram;

pub use config::SimilarityConfig;
pub use index::MinHashLsh;
pub use minhash::MinHash;
pub use ngram::ngrams;
