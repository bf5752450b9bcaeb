//! Domain error types for dprev.
//!
//! - [`InputError`] - Discussion file/stdin reading failures
//! - [`PreviewError`] - Preconditions of the layout engine
//! - [`ParseError`] - Per-line JSONL failures. These are **non-fatal**: the line is recorded
//!   as a [`MalformedRecord`](crate::model::MalformedRecord) and parsing continues.
//!
//! The shell folds the fatal ones into [`AppError`](crate::error::AppError).

use std::path::PathBuf;
use thiserror::Error;

/// Errors encountered when reading discussion input from files or stdin.
///
/// Distinguishes a missing file from an interactive terminal with nothing piped in,
/// so the CLI can print a targeted message.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified discussion file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use dprev::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.jsonl")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.jsonl"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// No file argument was given and stdin is a terminal.
    ///
    /// # Examples
    ///
    /// ```
    /// use dprev::model::error::InputError;
    ///
    /// let msg = InputError::NoInput.to_string();
    /// assert!(msg.contains("file path or pipe data to stdin"));
    /// ```
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// Generic I/O error reading from the input source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encountered when parsing a single JSONL discussion record.
///
/// Every variant carries the 1-indexed line number so users can locate the bad record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line is not valid JSON, or a field has the wrong JSON type.
    #[error("Invalid JSON at line {line}: {message}")]
    InvalidJson {
        /// Line number (1-indexed)
        line: usize,
        /// serde_json error message
        message: String,
    },

    /// The record's `type` tag is neither `message` nor `mention`.
    #[error("Unknown record type '{kind}' at line {line}")]
    UnknownRecordType {
        /// Line number (1-indexed)
        line: usize,
        /// The unrecognized tag
        kind: String,
    },

    /// A field required by the record type is absent.
    #[error("Missing required field '{field}' at line {line}")]
    MissingField {
        /// Line number (1-indexed)
        line: usize,
        /// Name of the missing field
        field: &'static str,
    },

    /// An identifier field was present but empty.
    #[error("Invalid identifier in field '{field}' at line {line}")]
    InvalidIdentifier {
        /// Line number (1-indexed)
        line: usize,
        /// Name of the offending field
        field: &'static str,
    },
}

/// Precondition failures of the preview layout engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreviewError {
    /// `get_preview_layout` requires at least the root message.
    #[error("Discussion has no messages: a root post is required")]
    EmptyDiscussion,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_error_names_the_missing_root() {
        assert_eq!(
            PreviewError::EmptyDiscussion.to_string(),
            "Discussion has no messages: a root post is required"
        );
    }

    #[test]
    fn io_error_converts_into_input_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: InputError = io.into();
        assert!(matches!(err, InputError::Io(_)));
    }

    #[test]
    fn parse_error_messages_include_line_numbers() {
        let err = ParseError::UnknownRecordType {
            line: 7,
            kind: "reaction".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown record type 'reaction' at line 7");

        let err = ParseError::InvalidIdentifier {
            line: 3,
            field: "mid",
        };
        assert_eq!(err.to_string(), "Invalid identifier in field 'mid' at line 3");
    }
}
