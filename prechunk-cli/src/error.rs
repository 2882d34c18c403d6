//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Source directory missing or not a directory
    SourceNotFound(String),
    /// Output directory holds prior content and --overwrite was not passed
    OutputNotEmpty(String),
    /// Configuration error
    ConfigError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::SourceNotFound(path) => {
                write!(f, "Source directory not found: {path}")
            }
            CliError::OutputNotEmpty(path) => {
                write!(
                    f,
                    "Output directory is not empty: {path} (pass --overwrite to clear it)"
                )
            }
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
