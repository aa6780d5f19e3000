//! Configuration API for the analyzer

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Default configuration constants
pub mod defaults {
    /// Missing-accent words listed per finding
    pub const ACCENT_CHUNK: usize = 5;
    /// Informal terms shown before the list is elided
    pub const INFORMAL_DISPLAY_CAP: usize = 8;
    /// Comma check applies above this many words
    pub const COMMA_MIN_WORDS: usize = 40;
    /// Fewer commas than this is flagged
    pub const COMMA_MIN_COUNT: usize = 2;
    /// Single-paragraph check applies above this many words
    pub const PARAGRAPH_MIN_WORDS: usize = 80;
    /// Sentences with more words than this are too long
    pub const LONG_SENTENCE_WORDS: usize = 45;
    /// Only words strictly longer than this are counted for repetition
    pub const REPETITION_MIN_WORD_LEN: usize = 3;
    /// Occurrences at which a word counts as repeated
    pub const REPETITION_MIN_COUNT: usize = 4;
    /// Repeated words listed in the finding
    pub const REPETITION_LISTED: usize = 5;
    /// External findings kept per call
    pub const EXTERNAL_MAX_FINDINGS: usize = 20;
    /// External rules that are dropped as noise
    pub const EXTERNAL_IGNORED_RULES: &[&str] = &[
        "WHITESPACE_RULE",
        "COMMA_PARENTHESIS_WHITESPACE",
        "UNPAIRED_BRACKETS",
    ];
    /// LanguageTool language code
    pub const LANGUAGETOOL_LANGUAGE: &str = "pt-BR";
    /// LanguageTool server address
    pub const LANGUAGETOOL_URL: &str = "http://localhost:8081";
    /// LanguageTool request timeout
    pub const LANGUAGETOOL_TIMEOUT_MS: u64 = 5000;
}

/// Thresholds used by the structural rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleThresholds {
    pub accent_chunk: usize,
    pub informal_display_cap: usize,
    pub comma_min_words: usize,
    pub comma_min_count: usize,
    pub paragraph_min_words: usize,
    pub long_sentence_words: usize,
    pub repetition_min_word_len: usize,
    pub repetition_min_count: usize,
    pub repetition_listed: usize,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            accent_chunk: defaults::ACCENT_CHUNK,
            informal_display_cap: defaults::INFORMAL_DISPLAY_CAP,
            comma_min_words: defaults::COMMA_MIN_WORDS,
            comma_min_count: defaults::COMMA_MIN_COUNT,
            paragraph_min_words: defaults::PARAGRAPH_MIN_WORDS,
            long_sentence_words: defaults::LONG_SENTENCE_WORDS,
            repetition_min_word_len: defaults::REPETITION_MIN_WORD_LEN,
            repetition_min_count: defaults::REPETITION_MIN_COUNT,
            repetition_listed: defaults::REPETITION_LISTED,
        }
    }
}

/// Normalisation settings for external checker findings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalConfig {
    pub max_findings: usize,
    pub ignored_rules: Vec<String>,
}

impl Default for ExternalConfig {
    fn default() -> Self {
        Self {
            max_findings: defaults::EXTERNAL_MAX_FINDINGS,
            ignored_rules: defaults::EXTERNAL_IGNORED_RULES
                .iter()
                .map(|r| r.to_string())
                .collect(),
        }
    }
}

/// Connection settings for a LanguageTool server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageToolConfig {
    pub url: String,
    pub language: String,
    pub timeout_ms: u64,
}

impl Default for LanguageToolConfig {
    fn default() -> Self {
        Self {
            url: defaults::LANGUAGETOOL_URL.to_string(),
            language: defaults::LANGUAGETOOL_LANGUAGE.to_string(),
            timeout_ms: defaults::LANGUAGETOOL_TIMEOUT_MS,
        }
    }
}

/// Analyzer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub thresholds: RuleThresholds,
    pub external: ExternalConfig,
    /// Evaluate rules on the rayon pool
    pub parallel: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            thresholds: RuleThresholds::default(),
            external: ExternalConfig::default(),
            parallel: false,
        }
    }
}

impl AnalyzerConfig {
    /// Create a configuration builder
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Error> {
        let t = &self.thresholds;
        let non_zero = [
            ("accent_chunk", t.accent_chunk),
            ("informal_display_cap", t.informal_display_cap),
            ("repetition_min_count", t.repetition_min_count),
            ("repetition_listed", t.repetition_listed),
            ("max_findings", self.external.max_findings),
        ];
        for (name, value) in non_zero {
            if value == 0 {
                return Err(Error::Configuration(format!(
                    "{name} must be greater than 0"
                )));
            }
        }
        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct AnalyzerConfigBuilder {
    thresholds: Option<RuleThresholds>,
    external: Option<ExternalConfig>,
    parallel: Option<bool>,
}

impl AnalyzerConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the rule thresholds
    pub fn thresholds(mut self, thresholds: RuleThresholds) -> Self {
        self.thresholds = Some(thresholds);
        self
    }

    /// Replace the external checker settings
    pub fn external(mut self, external: ExternalConfig) -> Self {
        self.external = Some(external);
        self
    }

    /// Cap the number of external findings per call
    pub fn max_external_findings(mut self, max: usize) -> Self {
        let mut external = self.external.take().unwrap_or_default();
        external.max_findings = max;
        self.external = Some(external);
        self
    }

    /// Evaluate rules in parallel
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AnalyzerConfig, Error> {
        let mut config = AnalyzerConfig::default();

        if let Some(thresholds) = self.thresholds {
            config.thresholds = thresholds;
        }

        if let Some(external) = self.external {
            config.external = external;
        }

        if let Some(parallel) = self.parallel {
            config.parallel = parallel;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_rule_constants() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.thresholds.long_sentence_words, 45);
        assert_eq!(config.thresholds.repetition_min_count, 4);
        assert_eq!(config.external.max_findings, 20);
        assert_eq!(config.external.ignored_rules.len(), 3);
        assert!(!config.parallel);
    }

    #[test]
    fn test_builder_overrides() {
        let config = AnalyzerConfig::builder()
            .max_external_findings(5)
            .parallel(true)
            .build()
            .unwrap();
        assert_eq!(config.external.max_findings, 5);
        assert!(config.external.ignored_rules.contains(&"WHITESPACE_RULE".to_string()));
        assert!(config.parallel);
    }

    #[test]
    fn test_zero_cap_rejected() {
        let result = AnalyzerConfig::builder().max_external_findings(0).build();
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AnalyzerConfig = toml::from_str(
            r#"
parallel = true

[thresholds]
long_sentence_words = 30
"#,
        )
        .unwrap();
        assert!(config.parallel);
        assert_eq!(config.thresholds.long_sentence_words, 30);
        assert_eq!(config.thresholds.comma_min_words, 40);
        assert_eq!(config.external.max_findings, 20);
    }
}
