//! Error handling for the CLI application

use std::fmt;

/// Shell-policy failures reported to the user
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Input is empty after trimming
    EmptyText(String),
    /// Input exceeds the configured character limit
    TextTooLong {
        source: String,
        chars: usize,
        limit: usize,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::EmptyText(source) => write!(f, "Text is empty: {source}"),
            CliError::TextTooLong {
                source,
                chars,
                limit,
            } => write!(
                f,
                "Text too long: {source} has {chars} characters (maximum {limit})"
            ),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
