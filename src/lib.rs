//! # Quill
//!
//! An interactive spelling corrector for Rust, built on a prefix trie and
//! MinHash locality-sensitive hashing.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Case-insensitive dictionary with fast exact lookup
//! - Approximate candidate retrieval via banded MinHash signatures
//! - Pluggable correction strategies (edit distance, adjacent swaps,
//!   lookup tables)
//! - Interactive document checking

pub mod checker;
pub mod cli;
pub mod error;
pub mod lsh;
pub mod spelling;
pub mod tokenizer;

pub mod prelude {
    pub use crate::checker::SpellChecker;
    pub use crate::error::{QuillError, Result};
    pub use crate::spelling::{
        Corrector, Dictionary, FileCorrector, LevenshteinCorrector, SwapCorrector,
    };
    pub use crate::tokenizer::TokenScanner;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
