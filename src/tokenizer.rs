//! Token scanning for documents.
//!
//! [`TokenScanner`] splits text into an alternating sequence of word and
//! non-word tokens. A word token is a maximal run of word characters
//! (alphabetic or apostrophe), a non-word token is a maximal run of
//! everything else. Concatenating the tokens in order reproduces the input
//! exactly, which lets the checker rewrite words in place while passing
//! whitespace and punctuation through untouched.
//!
//! # Examples
//!
//! ```
//! use quill::tokenizer::TokenScanner;
//!
//! let tokens: Vec<String> = TokenScanner::from_text("It's time\n2 e-mail!").collect();
//! assert_eq!(tokens, vec!["It's", " ", "time", "\n2 ", "e", "-", "mail", "!"]);
//! ```

use std::io::Read;

use crate::error::Result;

/// Returns true if `c` can appear inside a word token.
///
/// Word characters are alphabetic characters and the apostrophe, so
/// contractions like "it's" scan as a single token.
pub fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || c == '\''
}

/// Returns true if `token` is a valid word: non-empty and made up
/// entirely of word characters.
pub fn is_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(is_word_char)
}

/// An iterator over the word and non-word tokens of a text.
///
/// The scanner buffers the whole input up front, so construction from a
/// reader is the only fallible step. Iteration itself never fails.
#[derive(Debug)]
pub struct TokenScanner {
    chars: Vec<char>,
    pos: usize,
}

impl TokenScanner {
    /// Create a scanner that reads the entire `reader` before tokenizing.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the reader fails or yields invalid UTF-8.
    pub fn new<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::from_text(&text))
    }

    /// Create a scanner over an in-memory string.
    pub fn from_text(text: &str) -> Self {
        TokenScanner {
            chars: text.chars().collect(),
            pos: 0,
        }
    }
}

impl Iterator for TokenScanner {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.pos >= self.chars.len() {
            return None;
        }

        // Extend the token while the character class stays the same.
        let in_word = is_word_char(self.chars[self.pos]);
        let start = self.pos;
        while self.pos < self.chars.len() && is_word_char(self.chars[self.pos]) == in_word {
            self.pos += 1;
        }

        Some(self.chars[start..self.pos].iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_characters() {
        assert!(is_word_char('a'));
        assert!(is_word_char('Z'));
        assert!(is_word_char('\''));
        assert!(is_word_char('é'));
        assert!(!is_word_char('2'));
        assert!(!is_word_char(' '));
        assert!(!is_word_char('-'));
    }

    #[test]
    fn test_is_word() {
        assert!(is_word("apple"));
        assert!(is_word("it's"));
        assert!(!is_word(""));
        assert!(!is_word("e-mail"));
        assert!(!is_word("two words"));
    }

    #[test]
    fn test_alternating_tokens() {
        let tokens: Vec<String> = TokenScanner::from_text("It's time\n2 e-mail!").collect();
        assert_eq!(
            tokens,
            vec!["It's", " ", "time", "\n2 ", "e", "-", "mail", "!"]
        );
    }

    #[test]
    fn test_tokens_rejoin_to_input() {
        let text = "The quick brown fox -- jumped, over 2 lazy dogs!\n";
        let rejoined: String = TokenScanner::from_text(text).collect();
        assert_eq!(rejoined, text);
    }

    #[test]
    fn test_empty_input() {
        let mut scanner = TokenScanner::from_text("");
        assert_eq!(scanner.next(), None);
    }

    #[test]
    fn test_single_run() {
        let tokens: Vec<String> = TokenScanner::from_text("hello").collect();
        assert_eq!(tokens, vec!["hello"]);

        let tokens: Vec<String> = TokenScanner::from_text(" \t\n").collect();
        assert_eq!(tokens, vec![" \t\n"]);
    }

    #[test]
    fn test_reader_construction() {
        let scanner = TokenScanner::new("on two".as_bytes()).unwrap();
        let tokens: Vec<String> = scanner.collect();
        assert_eq!(tokens, vec!["on", " ", "two"]);
    }
}
