//! Lookup-table correction loaded from a file.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use ahash::AHashMap;
use log::debug;

use crate::error::{QuillError, Result};
use crate::spelling::corrector::{Corrector, match_case_all};
use crate::tokenizer;

/// A corrector backed by a flat table of known misspellings.
///
/// The table is CSV, one `misspelled,corrected` pair per line:
///
/// ```text
/// aligatur,alligator
/// ther,their
/// ther,there
/// inspite,in spite
/// ```
///
/// Fields are trimmed of surrounding whitespace. Keys are case-folded;
/// corrected values are kept as written and may contain spaces. A key
/// listed on several lines accumulates its corrections in file order.
/// Any line without exactly two non-empty fields aborts the whole load.
#[derive(Debug)]
pub struct FileCorrector {
    table: AHashMap<String, Vec<String>>,
}

impl FileCorrector {
    /// Parse a correction table from a reader.
    ///
    /// # Errors
    ///
    /// Returns a format error naming the line number of the first
    /// malformed line, or an I/O error if reading fails.
    pub fn new<R: Read>(reader: R) -> Result<Self> {
        let mut table: AHashMap<String, Vec<String>> = AHashMap::new();

        for (index, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() != 2 {
                return Err(QuillError::format(format!(
                    "line {}: expected 'misspelled,corrected', got {:?}",
                    index + 1,
                    line
                )));
            }

            let misspelled = fields[0].trim().to_lowercase();
            let corrected = fields[1].trim();
            if misspelled.is_empty() || corrected.is_empty() {
                return Err(QuillError::format(format!(
                    "line {}: empty field in {:?}",
                    index + 1,
                    line
                )));
            }

            let corrections = table.entry(misspelled).or_default();
            if !corrections.iter().any(|c| c == corrected) {
                corrections.push(corrected.to_string());
            }
        }

        debug!("loaded correction table with {} keys", table.len());
        Ok(FileCorrector { table })
    }

    /// Parse a correction table from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::new(File::open(path)?)
    }

    /// Number of distinct misspelled keys in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// True if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Corrector for FileCorrector {
    fn corrections(&self, wrong: &str) -> Result<Vec<String>> {
        if !tokenizer::is_word(wrong) {
            return Err(QuillError::invalid_argument(format!(
                "not a word token: {wrong:?}"
            )));
        }

        let hits = self
            .table
            .get(&wrong.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or_default();
        Ok(match_case_all(wrong, hits))
    }
}
