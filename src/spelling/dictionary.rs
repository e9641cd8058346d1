//! The word dictionary: exact membership plus approximate candidates.

use std::fs::File;
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::lsh::{MinHash, MinHashLsh, SimilarityConfig, ngrams};
use crate::spelling::trie::Trie;
use crate::tokenizer::{self, TokenScanner};

/// A case-insensitive dictionary of known words.
///
/// Composes a prefix trie for exact lookup with a MinHash LSH index for
/// approximate candidate retrieval. Built once from a token source and
/// immutable afterwards, so a constructed dictionary can be shared freely
/// across readers.
///
/// # Examples
///
/// ```
/// use quill::spelling::Dictionary;
/// use quill::tokenizer::TokenScanner;
///
/// let dict = Dictionary::new(TokenScanner::from_text("The quick brown fox")).unwrap();
/// assert!(dict.is_word("Quick"));
/// assert_eq!(dict.num_words(), 4);
/// ```
#[derive(Debug)]
pub struct Dictionary {
    trie: Trie,
    lsh: MinHashLsh,
    config: SimilarityConfig,
}

impl Dictionary {
    /// Build a dictionary from a token source with the default similarity
    /// configuration.
    ///
    /// Tokens that are not words (see [`tokenizer::is_word`]) are ignored;
    /// word tokens are case-folded and indexed once each.
    pub fn new<I>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        Self::with_config(tokens, SimilarityConfig::default())
    }

    /// Build a dictionary with an explicit similarity configuration.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error if `config` does not validate.
    pub fn with_config<I>(tokens: I, config: SimilarityConfig) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        config.validate()?;
        let mut dictionary = Dictionary {
            trie: Trie::new(),
            lsh: MinHashLsh::new(config.bands, config.rows)?,
            config,
        };
        for token in tokens {
            if tokenizer::is_word(&token) {
                dictionary.add_word(&token);
            }
        }
        Ok(dictionary)
    }

    /// Build a dictionary by scanning a vocabulary file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let scanner = TokenScanner::new(File::open(path)?)?;
        let dictionary = Self::new(scanner)?;
        info!(
            "loaded {} words from {}",
            dictionary.num_words(),
            path.display()
        );
        Ok(dictionary)
    }

    fn add_word(&mut self, word: &str) {
        let lower = word.to_lowercase();
        // Case variants collapse to one entry; skipping re-inserts keeps the
        // LSH buckets free of duplicate keys.
        if self.trie.is_word(&lower) {
            return;
        }
        let signature = self.signature(&lower);
        self.trie.add_word(&lower);
        self.lsh.insert(&lower, &signature);
    }

    /// The signature of a word's 1-gram shingle set under this dictionary's
    /// permutation family.
    fn signature(&self, word: &str) -> MinHash {
        let mut minhash = MinHash::with_seed(self.config.permutations, self.config.seed);
        for gram in ngrams(1, word) {
            minhash.update(&gram);
        }
        minhash
    }

    /// Exact membership test, case-insensitive.
    pub fn is_word(&self, word: &str) -> bool {
        self.trie.is_word(word)
    }

    /// Approximate candidates for `word` from the LSH index.
    ///
    /// The result is neither complete nor precise: the banding scheme can
    /// miss similar words and routinely includes dissimilar ones. Callers
    /// apply their own exact filter.
    pub fn similar_words(&self, word: &str) -> Vec<String> {
        self.lsh.query(&self.signature(&word.to_lowercase()))
    }

    /// Number of distinct case-folded words.
    pub fn num_words(&self) -> usize {
        self.trie.unique_words()
    }

    /// The similarity configuration the dictionary was built with.
    pub fn config(&self) -> &SimilarityConfig {
        &self.config
    }
}
