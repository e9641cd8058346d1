//! Command implementations for the Quill CLI.

use crate::checker::SpellChecker;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{QuillError, Result};
use crate::spelling::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

/// Execute a CLI command.
pub fn execute_command(args: QuillArgs) -> Result<()> {
    match &args.command {
        Command::Check(check_args) => check_document(check_args.clone(), &args),
        Command::Suggest(suggest_args) => suggest_corrections(suggest_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Build the corrector selected on the command line.
///
/// The levenshtein and swap correctors borrow the dictionary; the table
/// corrector owns its lookup table and needs a misspellings file.
fn build_corrector<'a>(
    kind: CorrectorKind,
    dictionary: &'a Dictionary,
    misspellings: Option<&Path>,
    cli_args: &QuillArgs,
) -> Result<Box<dyn Corrector + 'a>> {
    match kind {
        CorrectorKind::Levenshtein => Ok(Box::new(LevenshteinCorrector::new(dictionary))),
        CorrectorKind::Swap => Ok(Box::new(SwapCorrector::new(dictionary))),
        CorrectorKind::Table => {
            let path = misspellings.ok_or_else(|| {
                QuillError::invalid_argument("the table corrector requires --misspellings <FILE>")
            })?;

            if cli_args.verbosity() > 1 {
                println!("Loading misspelling table from: {}", path.display());
            }

            Ok(Box::new(FileCorrector::from_file(path)?))
        }
    }
}

/// Interactively check a document.
fn check_document(args: CheckArgs, cli_args: &QuillArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading dictionary from: {}", args.dictionary.display());
    }

    let start_time = Instant::now();

    let dictionary = Dictionary::from_file(&args.dictionary)?;
    let corrector = build_corrector(
        args.corrector,
        &dictionary,
        args.misspellings.as_deref(),
        cli_args,
    )?;
    let checker = SpellChecker::new(corrector.as_ref(), &dictionary);

    if cli_args.verbosity() > 0 {
        println!("Checking document: {}", args.document.display());
    }

    let document = File::open(&args.document)?;
    let choices = io::stdin().lock();

    // When no output file is given the corrected text goes to stdout, so
    // the summary is suppressed to keep the stream clean.
    match &args.output {
        Some(path) => {
            let file = File::create(path)?;
            let mut writer = BufWriter::new(file);
            checker.check_document(document, choices, &mut writer)?;
            writer.flush()?;

            let duration = start_time.elapsed();
            output_result(
                "Document checked successfully",
                &CheckResult {
                    document: args.document.to_string_lossy().to_string(),
                    output: path.to_string_lossy().to_string(),
                    duration_ms: duration.as_millis() as u64,
                },
                cli_args,
            )?;
        }
        None => {
            let stdout = io::stdout().lock();
            checker.check_document(document, choices, stdout)?;
        }
    }

    Ok(())
}

/// Print correction candidates for a single word.
fn suggest_corrections(args: SuggestArgs, cli_args: &QuillArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading dictionary from: {}", args.dictionary.display());
    }

    let dictionary = Dictionary::from_file(&args.dictionary)?;
    let corrector = build_corrector(
        args.corrector,
        &dictionary,
        args.misspellings.as_deref(),
        cli_args,
    )?;

    if dictionary.is_word(&args.word) && cli_args.verbosity() > 0 {
        println!("\"{}\" is already spelled correctly.", args.word);
        println!();
    }

    let start_time = Instant::now();
    let corrections = corrector.corrections(&args.word)?;
    let duration = start_time.elapsed();

    output_result(
        "Suggestions ready",
        &SuggestionResult {
            word: args.word,
            corrections,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )?;

    Ok(())
}

/// Show dictionary statistics.
fn show_stats(args: StatsArgs, cli_args: &QuillArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Gathering statistics for: {}", args.dictionary.display());
    }

    let dictionary = Dictionary::from_file(&args.dictionary)?;
    let config = dictionary.config();

    let stats = DictionaryStats {
        path: args.dictionary.to_string_lossy().to_string(),
        unique_words: dictionary.num_words(),
        permutations: config.permutations,
        bands: config.bands,
        rows: config.rows,
        seed: config.seed,
    };

    output_result("Dictionary statistics", &stats, cli_args)?;

    Ok(())
}
