//! Command line argument parsing for the Quill CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Quill - An interactive spelling corrector
#[derive(Parser, Debug, Clone)]
#[command(name = "quill")]
#[command(about = "Check documents and suggest corrections for misspelled words")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Quill Contributors")]
#[command(long_about = None)]
pub struct QuillArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl QuillArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Interactively check a document and write the corrected text
    Check(CheckArgs),

    /// Print correction candidates for a single word
    Suggest(SuggestArgs),

    /// Show dictionary statistics
    Stats(StatsArgs),
}

/// Arguments for checking a document
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Path to the dictionary file (plain text)
    #[arg(short, long, value_name = "FILE", env = "QUILL_DICTIONARY")]
    pub dictionary: PathBuf,

    /// Path to the document to check
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Corrector used to propose replacements
    #[arg(short, long, default_value = "levenshtein")]
    pub corrector: CorrectorKind,

    /// Path to a misspelling table (CSV), required by the table corrector
    #[arg(short, long, value_name = "FILE")]
    pub misspellings: Option<PathBuf>,

    /// Write the corrected document to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for suggesting corrections for a single word
#[derive(clap::Args, Debug, Clone)]
pub struct SuggestArgs {
    /// Path to the dictionary file (plain text)
    #[arg(short, long, value_name = "FILE", env = "QUILL_DICTIONARY")]
    pub dictionary: PathBuf,

    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Corrector used to propose replacements
    #[arg(short, long, default_value = "levenshtein")]
    pub corrector: CorrectorKind,

    /// Path to a misspelling table (CSV), required by the table corrector
    #[arg(short, long, value_name = "FILE")]
    pub misspellings: Option<PathBuf>,
}

/// Arguments for showing dictionary statistics
#[derive(clap::Args, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the dictionary file (plain text)
    #[arg(short, long, value_name = "FILE", env = "QUILL_DICTIONARY")]
    pub dictionary: PathBuf,
}

/// Correction strategies selectable from the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrectorKind {
    /// Dictionary words within Levenshtein distance one
    Levenshtein,
    /// Dictionary words reachable by swapping two adjacent letters
    Swap,
    /// Fixed misspelling table loaded from a CSV file
    Table,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_suggest() {
        let args =
            QuillArgs::try_parse_from(["quill", "suggest", "--dictionary", "words.txt", "lyon"])
                .unwrap();

        match args.command {
            Command::Suggest(suggest) => {
                assert_eq!(suggest.dictionary, PathBuf::from("words.txt"));
                assert_eq!(suggest.word, "lyon");
                assert_eq!(suggest.corrector, CorrectorKind::Levenshtein);
                assert!(suggest.misspellings.is_none());
            }
            other => panic!("expected suggest command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_check_with_corrector() {
        let args = QuillArgs::try_parse_from([
            "quill",
            "check",
            "--dictionary",
            "words.txt",
            "--corrector",
            "swap",
            "--output",
            "fixed.txt",
            "essay.txt",
        ])
        .unwrap();

        match args.command {
            Command::Check(check) => {
                assert_eq!(check.document, PathBuf::from("essay.txt"));
                assert_eq!(check.corrector, CorrectorKind::Swap);
                assert_eq!(check.output, Some(PathBuf::from("fixed.txt")));
            }
            other => panic!("expected check command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_table_corrector_with_misspellings() {
        let args = QuillArgs::try_parse_from([
            "quill",
            "suggest",
            "--dictionary",
            "words.txt",
            "--corrector",
            "table",
            "--misspellings",
            "typos.csv",
            "teh",
        ])
        .unwrap();

        match args.command {
            Command::Suggest(suggest) => {
                assert_eq!(suggest.corrector, CorrectorKind::Table);
                assert_eq!(suggest.misspellings, Some(PathBuf::from("typos.csv")));
            }
            other => panic!("expected suggest command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_stats() {
        let args =
            QuillArgs::try_parse_from(["quill", "stats", "--dictionary", "words.txt"]).unwrap();

        match args.command {
            Command::Stats(stats) => {
                assert_eq!(stats.dictionary, PathBuf::from("words.txt"));
            }
            other => panic!("expected stats command, got {other:?}"),
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let base = QuillArgs::try_parse_from(["quill", "stats", "-d", "words.txt"]).unwrap();
        assert_eq!(base.verbosity(), 1);

        let verbose =
            QuillArgs::try_parse_from(["quill", "-vv", "stats", "-d", "words.txt"]).unwrap();
        assert_eq!(verbose.verbosity(), 2);

        let quiet =
            QuillArgs::try_parse_from(["quill", "--quiet", "stats", "-d", "words.txt"]).unwrap();
        assert_eq!(quiet.verbosity(), 0);
    }

    #[test]
    fn test_invalid_corrector_rejected() {
        let result = QuillArgs::try_parse_from([
            "quill",
            "suggest",
            "--dictionary",
            "words.txt",
            "--corrector",
            "metaphone",
            "teh",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_format_parsing() {
        let args = QuillArgs::try_parse_from(["quill", "stats", "-d", "words.txt"]).unwrap();
        assert_eq!(args.output_format, OutputFormat::Human);

        let json =
            QuillArgs::try_parse_from(["quill", "--format", "json", "stats", "-d", "words.txt"])
                .unwrap();
        assert_eq!(json.output_format, OutputFormat::Json);
    }
}
