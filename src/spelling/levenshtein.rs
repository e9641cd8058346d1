//! Edit-distance based correction.

use std::cmp::min;

use log::debug;

use crate::error::Result;
use crate::spelling::corrector::{Corrector, match_case_all};
use crate::spelling::dictionary::Dictionary;

/// Calculate the Levenshtein distance between two strings: the minimum
/// number of single-character insertions, deletions, and substitutions
/// turning one into the other. An adjacent transposition counts as two
/// edits, not one.
#[allow(clippy::needless_range_loop)]
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let chars1: Vec<char> = s1.chars().collect();
    let chars2: Vec<char> = s2.chars().collect();
    let len1 = chars1.len();
    let len2 = chars2.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut matrix = vec![vec![0; len2 + 1]; len1 + 1];
    for i in 0..=len1 {
        matrix[i][0] = i;
    }
    for j in 0..=len2 {
        matrix[0][j] = j;
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            let cost = if chars1[i - 1] == chars2[j - 1] { 0 } else { 1 };

            matrix[i][j] = min(
                min(
                    matrix[i - 1][j] + 1, // deletion
                    matrix[i][j - 1] + 1, // insertion
                ),
                matrix[i - 1][j - 1] + cost, // substitution
            );
        }
    }

    matrix[len1][len2]
}

/// Suggests dictionary words within edit distance one of the input.
///
/// The corrector first asks the dictionary's LSH index for approximate
/// candidates and keeps those within distance one of the case-folded input.
/// When the index returns nothing at all it falls back to enumerating every
/// single edit (deletion, a-z substitution, a-z insertion) and testing each
/// against the dictionary. A candidate set that exists but fails the
/// distance filter wholesale yields no corrections; the fallback only
/// covers outright index misses.
pub struct LevenshteinCorrector<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> LevenshteinCorrector<'a> {
    /// Create a corrector backed by `dictionary`.
    pub fn new(dictionary: &'a Dictionary) -> Self {
        LevenshteinCorrector { dictionary }
    }

    /// Enumerate every dictionary word reachable from `word` by one edit.
    ///
    /// Expects case-folded input. Duplicates are possible (two insertions
    /// can build the same word) and are collapsed by the caller.
    fn edits(&self, word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        let mut found = Vec::new();

        // Deletions.
        for i in 0..chars.len() {
            let mut candidate = String::with_capacity(word.len());
            candidate.extend(&chars[..i]);
            candidate.extend(&chars[i + 1..]);
            if self.dictionary.is_word(&candidate) {
                found.push(candidate);
            }
        }

        // Substitutions.
        for i in 0..chars.len() {
            for letter in 'a'..='z' {
                if letter == chars[i] {
                    continue;
                }
                let mut replaced = chars.clone();
                replaced[i] = letter;
                let candidate: String = replaced.into_iter().collect();
                if self.dictionary.is_word(&candidate) {
                    found.push(candidate);
                }
            }
        }

        // Insertions.
        for i in 0..=chars.len() {
            for letter in 'a'..='z' {
                let mut candidate = String::with_capacity(word.len() + 1);
                candidate.extend(&chars[..i]);
                candidate.push(letter);
                candidate.extend(&chars[i..]);
                if self.dictionary.is_word(&candidate) {
                    found.push(candidate);
                }
            }
        }

        found
    }
}

impl Corrector for LevenshteinCorrector<'_> {
    fn corrections(&self, wrong: &str) -> Result<Vec<String>> {
        let lower = wrong.to_lowercase();
        let candidates = self.dictionary.similar_words(&lower);

        let matches = if candidates.is_empty() {
            debug!("no index candidates for {lower:?}, enumerating edits");
            self.edits(&lower)
        } else {
            candidates
                .into_iter()
                .filter(|candidate| levenshtein_distance(&lower, candidate) <= 1)
                .collect()
        };

        Ok(match_case_all(wrong, matches))
    }
}
