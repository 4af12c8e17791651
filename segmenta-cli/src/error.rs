//! Error handling for the CLI application

use std::fmt;

/// CLI-specific failures
#[derive(Debug)]
pub enum CliError {
    /// Invalid file pattern
    InvalidPattern(String),
    /// No file matched the input patterns
    NoInputFiles,
    /// Malformed `--option KEY=VALUE`
    InvalidOption(String),
    /// Configuration file problem
    ConfigError(String),
    /// Segmentation failed for a file
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::NoInputFiles => write!(f, "No files found matching the provided patterns"),
            CliError::InvalidOption(option) => {
                write!(f, "Invalid option '{option}': expected KEY=VALUE")
            }
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
