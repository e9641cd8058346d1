//! Banded LSH index over MinHash signatures.

use ahash::{AHashMap, AHashSet};

use crate::error::{QuillError, Result};
use crate::lsh::minhash::MinHash;

/// Bucket key for one band: the sum of its slot values.
///
/// Accumulated in u64 so the sum of 32-bit slots cannot overflow. The key
/// is an opaque bucket identifier, never compared across bands.
fn band_key(chunk: &[u32]) -> u64 {
    chunk.iter().map(|&v| u64::from(v)).sum()
}

/// A banded locality-sensitive index mapping MinHash signatures to word keys.
///
/// A signature is split into `bands` contiguous chunks of `rows` slots, and
/// the word is registered in one bucket table per band. A query matches a
/// stored word when at least one band key agrees exactly, so near-identical
/// signatures are very likely to meet, at the price of unrelated words
/// occasionally sharing a bucket. Callers filter the candidates with an
/// exact check.
#[derive(Debug)]
pub struct MinHashLsh {
    bands: usize,
    rows: usize,
    buckets: Vec<AHashMap<u64, Vec<String>>>,
}

impl MinHashLsh {
    /// Create an empty index with the given band geometry.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error if `bands` or `rows` is zero.
    pub fn new(bands: usize, rows: usize) -> Result<Self> {
        if bands == 0 || rows == 0 {
            return Err(QuillError::invalid_argument("bands and rows must be > 0"));
        }
        Ok(MinHashLsh {
            bands,
            rows,
            buckets: (0..bands).map(|_| AHashMap::new()).collect(),
        })
    }

    /// Register `key` under the band buckets of `signature`.
    pub fn insert(&mut self, key: &str, signature: &MinHash) {
        let values = signature.hash_values();
        for (band, chunk) in values.chunks(self.rows).take(self.bands).enumerate() {
            self.buckets[band]
                .entry(band_key(chunk))
                .or_default()
                .push(key.to_string());
        }
    }

    /// Return every stored key sharing at least one band bucket with
    /// `signature`, deduplicated, in first-discovery order.
    pub fn query(&self, signature: &MinHash) -> Vec<String> {
        let mut seen = AHashSet::new();
        let mut results = Vec::new();
        let values = signature.hash_values();
        for (band, chunk) in values.chunks(self.rows).take(self.bands).enumerate() {
            if let Some(bucket) = self.buckets[band].get(&band_key(chunk)) {
                for word in bucket {
                    if seen.insert(word.as_str()) {
                        results.push(word.clone());
                    }
                }
            }
        }
        results
    }
}
