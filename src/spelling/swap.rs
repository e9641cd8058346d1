//! Adjacent-transposition correction.

use crate::error::{QuillError, Result};
use crate::spelling::corrector::{Corrector, match_case_all};
use crate::spelling::dictionary::Dictionary;
use crate::tokenizer;

/// True if `candidate` differs from `word` by exactly one swap of two
/// adjacent characters. Identical strings do not qualify.
fn is_adjacent_swap(word: &[char], candidate: &[char]) -> bool {
    if word.len() != candidate.len() {
        return false;
    }
    let Some(i) = word
        .iter()
        .zip(candidate.iter())
        .position(|(a, b)| a != b)
    else {
        return false;
    };
    i + 1 < word.len()
        && candidate[i] == word[i + 1]
        && candidate[i + 1] == word[i]
        && word[i + 2..] == candidate[i + 2..]
}

/// Suggests dictionary words that are one adjacent-letter swap away from
/// the input, catching typos like "wiht" for "with".
///
/// A transposition never changes a word's character set, so its signature
/// and bucket keys are identical to the correct word's and the LSH lookup
/// cannot miss it. There is no fallback: no candidates means no
/// corrections.
pub struct SwapCorrector<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> SwapCorrector<'a> {
    /// Create a corrector backed by `dictionary`.
    pub fn new(dictionary: &'a Dictionary) -> Self {
        SwapCorrector { dictionary }
    }
}

impl Corrector for SwapCorrector<'_> {
    fn corrections(&self, wrong: &str) -> Result<Vec<String>> {
        if !tokenizer::is_word(wrong) {
            return Err(QuillError::invalid_argument(format!(
                "not a word token: {wrong:?}"
            )));
        }

        let lower = wrong.to_lowercase();
        let wrong_chars: Vec<char> = lower.chars().collect();
        let matches: Vec<String> = self
            .dictionary
            .similar_words(&lower)
            .into_iter()
            .filter(|candidate| {
                let candidate_chars: Vec<char> = candidate.chars().collect();
                is_adjacent_swap(&wrong_chars, &candidate_chars)
            })
            .collect();

        Ok(match_case_all(wrong, matches))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::tokenizer::TokenScanner;

    fn dictionary_of(text: &str) -> Dictionary {
        Dictionary::new(TokenScanner::from_text(text)).unwrap()
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_swap_relation() {
        assert!(is_adjacent_swap(&chars("teh"), &chars("the")));
        assert!(is_adjacent_swap(&chars("ab"), &chars("ba")));

        // Identical, doubly swapped, or non-adjacent rearrangements fail.
        assert!(!is_adjacent_swap(&chars("the"), &chars("the")));
        assert!(!is_adjacent_swap(&chars("abcd"), &chars("badc")));
        assert!(!is_adjacent_swap(&chars("abc"), &chars("cba")));
        assert!(!is_adjacent_swap(&chars("abc"), &chars("abcd")));
    }

    #[test]
    fn test_every_adjacent_swap_of_a_word_is_found() {
        let dict = dictionary_of("carrot carry carat");
        let corrector = SwapCorrector::new(&dict);

        for wrong in ["acrrot", "crarot", "carrto"] {
            assert_eq!(corrector.corrections(wrong).unwrap(), vec!["carrot"]);
        }
    }

    #[test]
    fn test_swap_with_two_targets() {
        let dict = dictionary_of("heat hate");
        let corrector = SwapCorrector::new(&dict);

        assert_eq!(corrector.corrections("haet").unwrap(), vec!["heat", "hate"]);
    }

    #[test]
    fn test_capitalization_is_preserved() {
        let dict = dictionary_of("apple");
        let corrector = SwapCorrector::new(&dict);

        assert_eq!(corrector.corrections("Paple").unwrap(), vec!["Apple"]);
        assert_eq!(corrector.corrections("PAPLE").unwrap(), vec!["APPLE"]);
    }

    #[test]
    fn test_correct_word_is_not_its_own_swap() {
        let dict = dictionary_of("cool");
        let corrector = SwapCorrector::new(&dict);

        assert!(corrector.corrections("cool").unwrap().is_empty());
    }

    #[test]
    fn test_length_mismatch_candidates_are_rejected() {
        // "carot" shares the exact character set of "carrto" but not its
        // length, so it shares buckets yet never passes the filter.
        let dict = dictionary_of("carrot carot");
        let corrector = SwapCorrector::new(&dict);

        assert_eq!(corrector.corrections("carrto").unwrap(), vec!["carrot"]);
    }

    #[test]
    fn test_non_word_input_is_rejected() {
        let dict = dictionary_of("with");
        let corrector = SwapCorrector::new(&dict);

        assert!(corrector.corrections("e-mail").is_err());
        assert!(corrector.corrections("").is_err());
    }
}
