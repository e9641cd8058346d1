//! The corrector interface and shared output shaping.

use ahash::AHashSet;

use crate::error::Result;

/// A source of spelling corrections.
///
/// Implementations return an insertion-ordered, deduplicated set of
/// suggested replacements for a misspelled word, already recapitalized to
/// the input's casing pattern. An empty result means the corrector has
/// nothing to offer; errors are reserved for contract violations such as
/// querying a non-word token.
pub trait Corrector {
    /// Suggest corrections for `wrong`.
    fn corrections(&self, wrong: &str) -> Result<Vec<String>>;
}

/// Reapply the casing pattern of `pattern` to a lowercase candidate.
///
/// If every alphabetic character of the pattern is uppercase, the whole
/// candidate is uppercased, which survives length differences. Otherwise
/// uppercase positions are copied one by one where both strings have a
/// character.
///
/// # Examples
///
/// ```
/// use quill::spelling::corrector::match_case;
///
/// assert_eq!(match_case("TIGGER", "trigger"), "TRIGGER");
/// assert_eq!(match_case("Paple", "apple"), "Apple");
/// assert_eq!(match_case("paple", "apple"), "apple");
/// ```
pub fn match_case(pattern: &str, candidate: &str) -> String {
    let mut alpha = pattern.chars().filter(|c| c.is_alphabetic()).peekable();
    if alpha.peek().is_some() && alpha.all(char::is_uppercase) {
        return candidate.to_uppercase();
    }

    let pattern_chars: Vec<char> = pattern.chars().collect();
    let mut cased = String::with_capacity(candidate.len());
    for (i, c) in candidate.chars().enumerate() {
        if i < pattern_chars.len() && pattern_chars[i].is_uppercase() {
            cased.extend(c.to_uppercase());
        } else {
            cased.push(c);
        }
    }
    cased
}

/// Case-match every candidate against `pattern` and deduplicate, keeping
/// first-seen order.
pub fn match_case_all<I, S>(pattern: &str, candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = AHashSet::new();
    let mut corrections = Vec::new();
    for candidate in candidates {
        let cased = match_case(pattern, candidate.as_ref());
        if seen.insert(cased.clone()) {
            corrections.push(cased);
        }
    }
    corrections
}
