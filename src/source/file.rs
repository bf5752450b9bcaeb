//! File-based discussion source.

use crate::model::error::InputError;
use std::path::{Path, PathBuf};

/// A discussion stored in a JSONL file.
///
/// Existence is checked at construction so a bad path fails before any work.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for the given path.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file vanished since construction,
    /// `InputError::Io` for other I/O errors.
    pub fn read_to_string(&self) -> Result<String, InputError> {
        std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => InputError::FileNotFound {
                path: self.path.clone(),
            },
            _ => InputError::Io(e),
        })
    }
}
