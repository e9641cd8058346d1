//! Character n-gram extraction.

use ahash::AHashSet;

/// Extract the set of character n-grams of `word`.
///
/// For `n == 1` this is the word's character set, the shingle unit used by
/// dictionary signatures. Longer grams are taken over overlapping windows
/// of `n` characters. Words shorter than `n` produce no grams, and the
/// result is a set, so repeated grams collapse.
///
/// # Examples
///
/// ```
/// use quill::lsh::ngrams;
///
/// let grams = ngrams(1, "banana");
/// assert_eq!(grams.len(), 3); // b, a, n
/// assert!(grams.contains("a"));
/// ```
pub fn ngrams(n: usize, word: &str) -> AHashSet<String> {
    let mut grams = AHashSet::new();
    if n == 0 {
        return grams;
    }

    if n == 1 {
        for c in word.chars() {
            grams.insert(c.to_string());
        }
        return grams;
    }

    let chars: Vec<char> = word.chars().collect();
    for window in chars.windows(n) {
        grams.insert(window.iter().collect());
    }
    grams
}
