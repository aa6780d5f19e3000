//! TOML schema for lexicon files

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root lexicon document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub accents: HashMap<String, String>,
    #[serde(default)]
    pub informal: Vec<InformalEntry>,
    #[serde(default)]
    pub cliches: Vec<ClicheEntry>,
    #[serde(default)]
    pub vague: Vec<VagueEntry>,
    #[serde(default)]
    pub stopwords: Stopwords,
    pub concordance: Concordance,
}

/// Lexicon metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InformalEntry {
    pub pattern: String,
    pub term: String,
    pub replacement: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClicheEntry {
    pub pattern: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VagueEntry {
    pub pattern: String,
    /// A match is discarded when the rest of its line matches this pattern
    #[serde(default)]
    pub unless_followed_by: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stopwords {
    #[serde(default)]
    pub words: Vec<String>,
}

/// Word lists for the subject/verb agreement approximation.
///
/// Entries are regex alternatives, so `esses?` covers both forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Concordance {
    #[serde(default = "default_max_gap")]
    pub max_gap: usize,
    pub subjects: Vec<String>,
    pub verbs: Vec<String>,
}

fn default_max_gap() -> usize {
    30
}

impl LexiconConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("metadata.code must not be empty".to_string());
        }

        for (plain, accented) in &self.accents {
            if plain.is_empty() || accented.is_empty() {
                return Err("accent entries must not be empty".to_string());
            }
            if plain.to_lowercase() != *plain {
                return Err(format!("accent key '{plain}' must be lowercase"));
            }
        }

        if self.concordance.subjects.is_empty() || self.concordance.verbs.is_empty() {
            return Err("concordance needs at least one subject and one verb".to_string());
        }

        Ok(())
    }
}
