//! Malformed record type for unparseable JSONL lines.
//!
//! When a discussion line cannot be parsed into a message or mention,
//! a MalformedRecord is kept so the CLI can report it and continue.

/// A malformed JSONL line that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRecord {
    line_number: usize,
    raw_line: String,
    error_message: String,
}

impl MalformedRecord {
    /// Create a new malformed record.
    ///
    /// # Arguments
    ///
    /// * `line_number` - The line number in the JSONL input (1-indexed)
    /// * `raw_line` - The raw line content that failed to parse
    /// * `error_message` - Human-readable error message
    pub fn new(
        line_number: usize,
        raw_line: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            line_number,
            raw_line: raw_line.into(),
            error_message: error_message.into(),
        }
    }

    /// Get the line number where the error occurred.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Get the raw line content.
    pub fn raw_line(&self) -> &str {
        &self.raw_line
    }

    /// Get the error message.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }
}
