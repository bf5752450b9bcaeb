//! Discussion input sources.
//!
//! This module provides input sources for JSONL discussion data:
//! - File loading for a discussion saved on disk
//! - Stdin for piped input
//! - Unified InputSource enum for both

use crate::model::error::InputError;
use crate::parser::{parse_discussion, Discussion};
use std::path::PathBuf;

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// Unified input source for JSONL discussion data.
///
/// Sum type enforces exactly one variant.
#[derive(Debug)]
pub enum InputSource {
    /// File source - read once
    File(FileSource),
    /// Stdin source - reads piped stdin to EOF
    Stdin(StdinSource<std::io::Stdin>),
}

impl InputSource {
    /// Read the full input and parse it into a discussion.
    ///
    /// Returns parsed records, not raw strings (parse at boundary).
    ///
    /// # Errors
    ///
    /// Returns `InputError` for I/O errors. Malformed lines are not errors;
    /// they are reported in [`Discussion::malformed`].
    pub fn read_discussion(self) -> Result<Discussion, InputError> {
        let contents = match self {
            InputSource::File(f) => f.read_to_string()?,
            InputSource::Stdin(s) => s.read_to_string()?,
        };
        Ok(parse_discussion(&contents))
    }
}

/// Detect and create appropriate input source.
///
/// # Logic:
/// 1. If file path is provided: create FileSource
/// 2. If stdin is piped: use StdinSource
/// 3. Else: return InputError::NoInput
///
/// # Errors
///
/// Returns `InputError::NoInput` if no file is provided and stdin is a terminal.
/// Returns `InputError::FileNotFound` if the file does not exist.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) => Ok(InputSource::File(FileSource::new(path)?)),
        None => Ok(InputSource::Stdin(StdinSource::new()?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn read_discussion_parses_file_contents() {
        let test_file = std::env::temp_dir().join("dprev_source_read_discussion.jsonl");
        let content = r#"{"type":"message","id":"post","user_id":"u0","text":"root"}
{"type":"message","id":"m1","user_id":"u1","text":"reply"}
{"type":"mention","mid":"m1","by_uid":"u0"}
"#;
        fs::write(&test_file, content).unwrap();

        let source = detect_input_source(Some(test_file.clone())).unwrap();
        let discussion = source.read_discussion();

        let _ = fs::remove_file(&test_file);

        let discussion = discussion.unwrap();
        assert_eq!(discussion.messages.len(), 2);
        assert_eq!(discussion.mentions.len(), 1);
        assert!(discussion.malformed.is_empty());
    }

    #[test]
    fn detect_input_source_reports_missing_file() {
        let path = PathBuf::from("/nonexistent/dprev/discussion.jsonl");
        let result = detect_input_source(Some(path.clone()));

        match result {
            Err(InputError::FileNotFound { path: missing }) => assert_eq!(missing, path),
            other => panic!("Expected FileNotFound, got {:?}", other),
        }
    }
}
