//! Stdin-based discussion source for piped input.

use crate::model::error::InputError;
use std::io::{IsTerminal, Read};

/// Stdin source for piped JSONL input, e.g. `cat thread.jsonl | dprev`.
///
/// Refuses to start on an interactive terminal so the CLI never blocks
/// waiting for input the user forgot to pipe.
#[derive(Debug)]
pub struct StdinSource<R: Read> {
    reader: R,
}

impl StdinSource<std::io::Stdin> {
    /// Create a new StdinSource from stdin.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is a TTY (interactive terminal).
    pub fn new() -> Result<Self, InputError> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self { reader: stdin })
    }
}

impl<R: Read> StdinSource<R> {
    /// Create StdinSource from any reader (for testing).
    ///
    /// Internal constructor - bypasses TTY check for testing.
    #[cfg(test)]
    fn from_reader(reader: R) -> Self {
        Self { reader }
    }

    /// Read until EOF.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for I/O errors, including invalid UTF-8.
    pub fn read_to_string(mut self) -> Result<String, InputError> {
        let mut buffer = String::new();
        self.reader.read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}
