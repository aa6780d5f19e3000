//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use std::path::PathBuf;

use crate::error::CliError;

/// Argument value that selects standard input
pub const STDIN_MARKER: &str = "-";

/// Where a text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Expand `-i` arguments: a lone `-` means stdin, anything else is a
    /// glob pattern
    pub fn resolve(inputs: &[String]) -> Result<Vec<Self>> {
        if inputs.len() == 1 && inputs[0] == STDIN_MARKER {
            return Ok(vec![Self::Stdin]);
        }
        if inputs.iter().any(|i| i == STDIN_MARKER) {
            return Err(CliError::InvalidPattern(
                "'-' (stdin) cannot be combined with file patterns".to_string(),
            )
            .into());
        }
        Ok(resolve_patterns(inputs)?
            .into_iter()
            .map(Self::File)
            .collect())
    }

    /// Name used in reports
    pub fn label(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Read the whole text
    pub fn read(&self) -> Result<String> {
        match self {
            Self::Stdin => FileReader::read_stdin(),
            Self::File(path) => FileReader::read_text(path),
        }
    }
}

/// Trim `text` and apply the input policy: not empty, at most `max_chars`
/// characters
pub fn prepare_text(text: &str, source: &str, max_chars: usize) -> Result<String, CliError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CliError::EmptyText(source.to_string()));
    }
    let chars = trimmed.chars().count();
    if chars > max_chars {
        return Err(CliError::TextTooLong {
            source: source.to_string(),
            chars,
            limit: max_chars,
        });
    }
    Ok(trimmed.to_string())
}
