//! Error types for the quill library.
//!
//! All fallible operations in quill return [`QuillError`] through the
//! crate-wide [`Result`] alias.
//!
//! # Examples
//!
//! ```
//! use quill::error::{QuillError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(QuillError::invalid_argument("not a word"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for quill operations.
///
/// Uses the `thiserror` crate for the `Error` trait implementation and
/// provides convenient constructor methods for the string-carrying variants.
#[derive(Error, Debug)]
pub enum QuillError {
    /// I/O errors (reading dictionaries, documents, correction tables).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An argument violated a constructor or query contract.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A correction-table line did not match the expected format.
    #[error("format error: {0}")]
    Format(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with QuillError.
pub type Result<T> = std::result::Result<T, QuillError>;

impl QuillError {
    /// Create a new invalid-argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        QuillError::InvalidArgument(msg.into())
    }

    /// Create a new format error.
    pub fn format<S: Into<String>>(msg: S) -> Self {
        QuillError::Format(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        QuillError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = QuillError::invalid_argument("null dictionary");
        assert_eq!(error.to_string(), "invalid argument: null dictionary");

        let error = QuillError::format("line 3: expected 2 fields");
        assert_eq!(error.to_string(), "format error: line 3: expected 2 fields");

        let error = QuillError::other("unexpected");
        assert_eq!(error.to_string(), "error: unexpected");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let quill_error = QuillError::from(io_error);

        match quill_error {
            QuillError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
