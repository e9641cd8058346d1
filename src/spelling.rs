//! Spelling correction built on exact dictionary lookup and approximate
//! word matching.
//!
//! [`dictionary::Dictionary`] composes a prefix trie (exact, case-insensitive
//! membership) with a MinHash LSH index (approximate candidate retrieval).
//! The correctors implement the [`corrector::Corrector`] trait on top of it:
//! edit-distance filtering, adjacent-swap detection, and a flat lookup table
//! loaded from a file.

pub mod corrector;
pub mod dictionary;
pub mod file;
pub mod levenshtein;
pub mod swap;
pub mod trie;

pub use corrector::Corrector;
pub use dictionary::Dictionary;
pub use file::FileCorrector;
pub use levenshtein::{LevenshteinCorrector, levenshtein_distance};
pub use swap::SwapCorrector;
pub use trie::Trie;
