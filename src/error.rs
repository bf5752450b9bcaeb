//! Top-level error for the CLI shell.
//!
//! Folds the fatal failures of every layer into one [`AppError`] so `run`
//! can propagate them with `?` and `main` can print a single line.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::model::{InputError, PreviewError};
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
///
/// # Examples
///
/// ```no_run
/// use dprev::error::AppError;
/// use dprev::model::InputError;
///
/// fn run_app() -> Result<(), AppError> {
///     // InputError automatically converts to AppError via From
///     let _input = read_discussion()?;
///     Ok(())
/// }
/// # fn read_discussion() -> Result<(), InputError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the discussion from file or stdin.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// The discussion could not be laid out.
    #[error("Failed to build preview: {0}")]
    Preview(#[from] PreviewError),

    /// Configuration file exists but is unusable.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// The render plan could not be serialized.
    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_error_converts_into_app_error() {
        let app: AppError = InputError::NoInput.into();
        assert!(matches!(app, AppError::InputRead(InputError::NoInput)));
    }

    #[test]
    fn preview_error_converts_into_app_error() {
        let app: AppError = PreviewError::EmptyDiscussion.into();
        assert!(app.to_string().contains("root post is required"));
    }

    #[test]
    fn config_error_converts_into_app_error() {
        let app: AppError = ConfigError::InvalidPath("bad".to_string()).into();
        assert_eq!(app.to_string(), "Configuration error: Invalid config path: bad");
    }
}
