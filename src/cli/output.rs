//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, QuillArgs};
use crate::error::Result;

/// Result structure for the suggest command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionResult {
    pub word: String,
    pub corrections: Vec<String>,
    pub duration_ms: u64,
}

/// Dictionary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub path: String,
    pub unique_words: usize,
    pub permutations: usize,
    pub bands: usize,
    pub rows: usize,
    pub seed: u64,
}

/// Result structure for the check command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResult {
    pub document: String,
    pub output: String,
    pub duration_ms: u64,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &QuillArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &QuillArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("SuggestionResult") => {
            output_suggestions_human(&value, args)
        }
        _ if std::any::type_name::<T>().contains("DictionaryStats") => {
            output_dictionary_stats_human(&value, args)
        }
        _ => {
            // Generic output for other types
            output_generic_human(&value, args)
        }
    }
}

/// Output suggestion results in human format.
fn output_suggestions_human(value: &serde_json::Value, args: &QuillArgs) -> Result<()> {
    if let Some(obj) = value.as_object() {
        let word = obj.get("word").and_then(|w| w.as_str()).unwrap_or("");

        if let Some(corrections) = obj.get("corrections").and_then(|c| c.as_array()) {
            if corrections.is_empty() {
                println!("No corrections found for \"{word}\"");
            } else {
                println!("Corrections for \"{word}\":");
                println!("─────────────────");
                for (i, correction) in corrections.iter().enumerate() {
                    if let Some(text) = correction.as_str() {
                        println!("{}: {}", i + 1, text);
                    }
                }
            }
        }

        if args.verbosity() > 1
            && let Some(duration) = obj.get("duration_ms").and_then(|d| d.as_u64())
        {
            println!();
            println!("Lookup time: {duration}ms");
        }
    }
    Ok(())
}

/// Output dictionary statistics in human format.
fn output_dictionary_stats_human(value: &serde_json::Value, _args: &QuillArgs) -> Result<()> {
    if let Some(obj) = value.as_object() {
        println!("Dictionary Statistics:");
        println!("═════════════════════");

        if let Some(path) = obj.get("path").and_then(|p| p.as_str()) {
            println!("Dictionary: {path}");
        }

        if let Some(words) = obj.get("unique_words").and_then(|w| w.as_u64()) {
            println!("Unique words: {words}");
        }

        if let Some(permutations) = obj.get("permutations").and_then(|p| p.as_u64()) {
            println!("Signature permutations: {permutations}");
        }

        if let (Some(bands), Some(rows)) = (
            obj.get("bands").and_then(|b| b.as_u64()),
            obj.get("rows").and_then(|r| r.as_u64()),
        ) {
            println!("Index geometry: {bands} bands x {rows} rows");
        }

        if let Some(seed) = obj.get("seed").and_then(|s| s.as_u64()) {
            println!("Hash seed: {seed}");
        }
    }
    Ok(())
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value, _args: &QuillArgs) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &QuillArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(
            format_value(&serde_json::Value::String("test".to_string())),
            "test"
        );
        assert_eq!(
            format_value(&serde_json::Value::Number(serde_json::Number::from(42))),
            "42"
        );
        assert_eq!(format_value(&serde_json::Value::Bool(false)), "false");
        assert_eq!(format_value(&serde_json::Value::Null), "null");
    }

    #[test]
    fn test_format_value_array() {
        let arr = serde_json::json!(["their", "there"]);
        assert_eq!(format_value(&arr), "[their, there]");
    }

    #[test]
    fn test_suggestion_result_serializes() {
        let result = SuggestionResult {
            word: "lyon".to_string(),
            corrections: vec!["lion".to_string()],
            duration_ms: 3,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["word"], "lyon");
        assert_eq!(json["corrections"][0], "lion");
    }

    #[test]
    fn test_dictionary_stats_serializes() {
        let stats = DictionaryStats {
            path: "words.txt".to_string(),
            unique_words: 12,
            permutations: 64,
            bands: 4,
            rows: 16,
            seed: 1,
        };

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["unique_words"], 12);
        assert_eq!(json["bands"], 4);
    }
}
