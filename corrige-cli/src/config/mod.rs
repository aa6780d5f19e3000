//! Configuration module
//!
//! Optional TOML file passed with `--config`. Every section and key has a
//! default, so a partial file is valid; command-line flags win over it.

use anyhow::{Context, Result};
use corrige_core::{AnalyzerConfig, LanguageToolConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Input policy
    #[serde(default)]
    pub input: InputConfig,

    /// Analyzer thresholds and rule evaluation
    #[serde(default)]
    pub analysis: AnalyzerConfig,

    /// LanguageTool connection
    #[serde(default)]
    pub languagetool: LanguageToolSection,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        config
            .analysis
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

/// Input-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    /// Longest accepted text, in characters
    pub max_chars: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { max_chars: 10_000 }
    }
}

/// LanguageTool section
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LanguageToolSection {
    /// Connect even when no URL is given on the command line
    pub enabled: bool,

    #[serde(flatten)]
    pub server: LanguageToolConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}
