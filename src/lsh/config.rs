//! Configuration for the similarity matching subsystem.

use serde::{Deserialize, Serialize};

use crate::error::{QuillError, Result};

/// Configuration for MinHash signatures and the banded LSH index.
///
/// The signature length must equal `bands * rows` so that every slot of a
/// signature falls into exactly one band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityConfig {
    /// Signature length: number of hash permutations per signature.
    pub permutations: usize,
    /// Number of LSH bands.
    pub bands: usize,
    /// Number of signature slots per band.
    pub rows: usize,
    /// Seed for the deterministic permutation family.
    pub seed: u64,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        SimilarityConfig {
            permutations: 64, // 4 bands x 16 rows
            bands: 4,
            rows: 16,
            seed: 1,
        }
    }
}

impl SimilarityConfig {
    /// Create a configuration with the given band geometry.
    ///
    /// The signature length is derived as `bands * rows`.
    pub fn new(bands: usize, rows: usize) -> Self {
        SimilarityConfig {
            permutations: bands * rows,
            bands,
            rows,
            ..Default::default()
        }
    }

    /// Set the permutation seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate the configuration parameters.
    pub fn validate(&self) -> Result<()> {
        if self.permutations == 0 {
            return Err(QuillError::invalid_argument("permutations must be > 0"));
        }
        if self.bands == 0 || self.rows == 0 {
            return Err(QuillError::invalid_argument("bands and rows must be > 0"));
        }
        if self.bands * self.rows != self.permutations {
            return Err(QuillError::invalid_argument(format!(
                "bands * rows must equal permutations ({} * {} != {})",
                self.bands, self.rows, self.permutations
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimilarityConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.permutations, 64);
        assert_eq!(config.bands, 4);
        assert_eq!(config.rows, 16);
        assert_eq!(config.seed, 1);
    }

    #[test]
    fn test_derived_geometry() {
        let config = SimilarityConfig::new(8, 8).with_seed(7);
        assert_eq!(config.permutations, 64);
        assert_eq!(config.seed, 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SimilarityConfig {
            permutations: 0,
            bands: 0,
            rows: 0,
            seed: 1,
        };
        assert!(config.validate().is_err());

        let config = SimilarityConfig {
            permutations: 64,
            bands: 4,
            rows: 8,
            seed: 1,
        };
        assert!(config.validate().is_err());
    }
}
