//! MinHash signatures over shingle sets.
//!
//! A [`MinHash`] summarizes a set of shingles as a fixed-length vector of
//! minimum hash values, one per permutation of a deterministic permutation
//! family. The probability that two signatures agree in one slot equals the
//! Jaccard similarity of the underlying sets, so the fraction of matching
//! slots estimates it.
//!
//! All signatures built with the same seed draw identical permutation
//! coefficients, which is what makes them comparable slot by slot.

use std::hash::BuildHasher;

use ahash::RandomState;
use rand::prelude::*;

/// Largest 31-bit Mersenne prime, the modulus of the permutation family.
const MERSENNE_PRIME: u64 = (1 << 31) - 1;

/// Seed of the reference permutation family.
const DEFAULT_SEED: u64 = 1;

/// An accumulating MinHash signature.
///
/// Slots start at the maximum representable value and only ever decrease as
/// shingles are fed in, so the final signature depends on the shingle set
/// alone, not on insertion order or repetition.
///
/// # Examples
///
/// ```
/// use quill::lsh::MinHash;
///
/// let mut a = MinHash::new(64);
/// let mut b = MinHash::new(64);
/// for shingle in ["l", "i", "o", "n"] {
///     a.update(shingle);
/// }
/// for shingle in ["n", "o", "i", "l", "l"] {
///     b.update(shingle);
/// }
/// assert_eq!(a.hash_values(), b.hash_values());
/// ```
#[derive(Debug, Clone)]
pub struct MinHash {
    values: Vec<u32>,
    perm_a: Vec<u64>,
    perm_b: Vec<u64>,
    hasher: RandomState,
}

impl MinHash {
    /// Create a signature with `permutations` slots and the default seed.
    pub fn new(permutations: usize) -> Self {
        Self::with_seed(permutations, DEFAULT_SEED)
    }

    /// Create a signature with `permutations` slots, drawing the permutation
    /// family from `seed`.
    ///
    /// Signatures are only comparable when built with the same length and
    /// seed.
    pub fn with_seed(permutations: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let hasher =
            RandomState::with_seeds(rng.random(), rng.random(), rng.random(), rng.random());

        let mut perm_a = Vec::with_capacity(permutations);
        let mut perm_b = Vec::with_capacity(permutations);
        for _ in 0..permutations {
            perm_a.push(rng.random_range(1..MERSENNE_PRIME));
            perm_b.push(rng.random_range(0..MERSENNE_PRIME));
        }

        MinHash {
            values: vec![u32::MAX; permutations],
            perm_a,
            perm_b,
            hasher,
        }
    }

    /// Fold one shingle into the signature.
    pub fn update(&mut self, shingle: &str) {
        // Reduce the shingle hash below 2^31 so a * h + b stays within u64.
        let h = self.hasher.hash_one(shingle) % MERSENNE_PRIME;
        for (slot, (&a, &b)) in self
            .values
            .iter_mut()
            .zip(self.perm_a.iter().zip(self.perm_b.iter()))
        {
            let permuted = ((a * h + b) % MERSENNE_PRIME) as u32;
            if permuted < *slot {
                *slot = permuted;
            }
        }
    }

    /// The current signature, one minimum per permutation.
    pub fn hash_values(&self) -> &[u32] {
        &self.values
    }

    /// Signature length.
    pub fn permutations(&self) -> usize {
        self.values.len()
    }

    /// Estimate the Jaccard similarity of the underlying shingle sets as
    /// the fraction of matching slots.
    ///
    /// Signatures of different lengths are incomparable and estimate 0.
    pub fn jaccard(&self, other: &MinHash) -> f64 {
        if self.values.is_empty() || self.values.len() != other.values.len() {
            return 0.0;
        }
        let matches = self
            .values
            .iter()
            .zip(other.values.iter())
            .filter(|(a, b)| a == b)
            .count();
        matches as f64 / self.values.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::lsh::ngrams;

    fn signature_of(word: &str) -> MinHash {
        let mut minhash = MinHash::new(64);
        for gram in ngrams(1, word) {
            minhash.update(&gram);
        }
        minhash
    }

    #[test]
    fn test_fresh_signature_is_saturated() {
        let minhash = MinHash::new(8);
        assert_eq!(minhash.permutations(), 8);
        assert!(minhash.hash_values().iter().all(|&v| v == u32::MAX));
    }

    #[test]
    fn test_update_lowers_every_slot_below_modulus() {
        let mut minhash = MinHash::new(64);
        minhash.update("a");
        assert!(
            minhash
                .hash_values()
                .iter()
                .all(|&v| u64::from(v) < MERSENNE_PRIME)
        );
    }

    #[test]
    fn test_order_and_duplicates_do_not_matter() {
        let mut forward = MinHash::new(64);
        for shingle in ["t", "i", "g", "e", "r"] {
            forward.update(shingle);
        }

        let mut shuffled = MinHash::new(64);
        for shingle in ["r", "e", "g", "i", "t", "t", "g"] {
            shuffled.update(shingle);
        }

        assert_eq!(forward.hash_values(), shuffled.hash_values());
    }

    #[test]
    fn test_slots_never_increase() {
        let mut minhash = MinHash::new(64);
        minhash.update("a");
        let after_first = minhash.hash_values().to_vec();
        minhash.update("b");
        for (before, after) in after_first.iter().zip(minhash.hash_values()) {
            assert!(after <= before);
        }
    }

    #[test]
    fn test_same_seed_instances_are_comparable() {
        assert_eq!(
            signature_of("lion").hash_values(),
            signature_of("lion").hash_values()
        );
    }

    #[test]
    fn test_different_seeds_draw_different_permutations() {
        let a = MinHash::with_seed(64, 1);
        let b = MinHash::with_seed(64, 2);
        assert_ne!(a.perm_a, b.perm_a);
    }

    #[test]
    fn test_jaccard_tracks_set_overlap() {
        let lion = signature_of("lion");
        let lyon = signature_of("lyon");
        let wstz = signature_of("wstz");

        assert_eq!(lion.jaccard(&lion), 1.0);
        assert!(lion.jaccard(&lyon) > lion.jaccard(&wstz));
        assert!(lion.jaccard(&lyon) < 1.0);
    }

    #[test]
    fn test_jaccard_length_mismatch_is_zero() {
        let a = MinHash::new(64);
        let b = MinHash::new(32);
        assert_eq!(a.jaccard(&b), 0.0);
    }
}
