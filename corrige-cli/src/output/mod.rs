//! Output formatting module

use anyhow::Result;
use corrige_core::{AnalysisResult, FindingKind};
use std::io::Write;
use std::str::FromStr;

use crate::error::CliError;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the analysis of one text
    fn format_result(&mut self, source: &str, result: &AnalysisResult) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// JSON array of `{source, result}` objects
    Json,
    /// Markdown report with a findings table
    Markdown,
}

impl OutputFormat {
    /// Every format with a one-line description
    pub const ALL: [(OutputFormat, &'static str); 3] = [
        (OutputFormat::Text, "Human-readable report"),
        (OutputFormat::Json, "JSON array of {source, result} objects"),
        (OutputFormat::Markdown, "Markdown report with a findings table"),
    ];

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(CliError::ConfigError(format!(
                "unknown output format '{other}'"
            ))),
        }
    }
}

/// Build the formatter for `format` writing to `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer).pretty(pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

/// Portuguese label for a finding kind
pub(crate) fn kind_label(kind: FindingKind) -> &'static str {
    match kind {
        FindingKind::Grammar => "gramática",
        FindingKind::Style => "estilo",
        FindingKind::Tip => "dica",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_config_string() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("Markdown".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_names_round_trip() {
        for (format, _) in OutputFormat::ALL {
            assert_eq!(format.name().parse::<OutputFormat>().unwrap(), format);
        }
    }
}
