//! Interactive document checking.

use std::io::{BufRead, BufReader, Read, Write};

use crate::error::{QuillError, Result};
use crate::spelling::corrector::Corrector;
use crate::spelling::dictionary::Dictionary;
use crate::tokenizer::{self, TokenScanner};

/// Reads whitespace-delimited tokens from an interactive stream.
struct ChoiceReader<R: BufRead> {
    inner: R,
}

impl<R: BufRead> ChoiceReader<R> {
    fn new(inner: R) -> Self {
        ChoiceReader { inner }
    }

    /// Read the next token. Exhausting the stream is an error: the checker
    /// never asks for input it can do without.
    fn next_token(&mut self) -> Result<String> {
        let mut token = Vec::new();
        loop {
            let available = self.inner.fill_buf()?;
            if available.is_empty() {
                break;
            }
            let mut used = 0;
            let mut finished = false;
            for &byte in available {
                used += 1;
                if byte.is_ascii_whitespace() {
                    if token.is_empty() {
                        continue;
                    }
                    finished = true;
                    break;
                }
                token.push(byte);
            }
            self.inner.consume(used);
            if finished {
                break;
            }
        }

        if token.is_empty() {
            return Err(QuillError::other(
                "interactive input ended before a choice was made",
            ));
        }
        Ok(String::from_utf8_lossy(&token).into_owned())
    }
}

/// Interactively checks a document against a dictionary.
///
/// Word tokens missing from the dictionary are offered for correction: the
/// menu goes to stdout, the user's choices come from a dedicated input
/// stream, and the corrected document, with every other token untouched,
/// goes to the output writer.
pub struct SpellChecker<'a> {
    corrector: &'a dyn Corrector,
    dictionary: &'a Dictionary,
}

impl<'a> SpellChecker<'a> {
    /// Create a checker from a corrector and a dictionary.
    pub fn new(corrector: &'a dyn Corrector, dictionary: &'a Dictionary) -> Self {
        SpellChecker {
            corrector,
            dictionary,
        }
    }

    /// Check `document`, reading choices from `choices` and writing the
    /// corrected text to `output`.
    ///
    /// For every unknown word the user picks one of: `0` keeps the word,
    /// `1` substitutes the next token read from `choices`, and `n >= 2`
    /// substitutes the `(n - 2)`th suggested correction. Anything else
    /// re-prompts.
    pub fn check_document<D, C, W>(&self, document: D, choices: C, mut output: W) -> Result<()>
    where
        D: Read,
        C: Read,
        W: Write,
    {
        let mut choices = ChoiceReader::new(BufReader::new(choices));

        for token in TokenScanner::new(document)? {
            if tokenizer::is_word(&token) && !self.dictionary.is_word(&token) {
                let corrections = self.corrector.corrections(&token)?;
                let replacement = self.prompt(&token, &corrections, &mut choices)?;
                output.write_all(replacement.as_bytes())?;
            } else {
                output.write_all(token.as_bytes())?;
            }
        }
        output.flush()?;
        Ok(())
    }

    fn prompt<C: BufRead>(
        &self,
        word: &str,
        corrections: &[String],
        choices: &mut ChoiceReader<C>,
    ) -> Result<String> {
        println!("The word \"{word}\" is not in the dictionary. Please choose:");
        println!("  0: keep \"{word}\" as is");
        println!("  1: replace it with a word of your own");
        for (i, correction) in corrections.iter().enumerate() {
            println!("  {}: replace it with \"{correction}\"", i + 2);
        }

        loop {
            let token = choices.next_token()?;
            if let Ok(option) = token.parse::<usize>() {
                match option {
                    0 => return Ok(word.to_string()),
                    1 => return choices.next_token(),
                    n if n - 2 < corrections.len() => return Ok(corrections[n - 2].clone()),
                    _ => {}
                }
            }
            println!("Invalid choice. Try again!");
        }
    }
}
