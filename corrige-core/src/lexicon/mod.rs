//! Lexicon tables
//!
//! Static reference data for the rule evaluators: accent corrections,
//! informal terms, clichés, vague expressions, stop-words and the word lists
//! behind the agreement check. The Brazilian Portuguese lexicon is embedded
//! as TOML and parsed once per process; custom lexicons can be loaded from
//! files with the same schema.

pub mod config;
pub mod table;

use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::OnceLock;

use crate::error::LexiconError;
pub use config::LexiconConfig;
pub use table::{PatternEntry, PatternTable};

const EMBEDDED_PT_BR: &str = include_str!("../../configs/lexicon/pt-br.toml");

static EMBEDDED: OnceLock<Lexicon> = OnceLock::new();

/// Informal term and its standard-register replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InformalTerm {
    pub term: String,
    pub replacement: String,
}

/// Compiled, read-only lexicon
#[derive(Debug, Clone)]
pub struct Lexicon {
    code: String,
    name: String,
    accents: HashMap<String, String>,
    informal: PatternTable<InformalTerm>,
    cliches: PatternTable<String>,
    vague: PatternTable<()>,
    stopwords: HashSet<String>,
    concordance: Regex,
}

impl Lexicon {
    /// The embedded Brazilian Portuguese lexicon
    pub fn embedded() -> &'static Lexicon {
        EMBEDDED.get_or_init(|| {
            Self::from_toml_str(EMBEDDED_PT_BR).expect("Failed to load embedded pt-BR lexicon")
        })
    }

    /// Parse and compile a lexicon from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self, LexiconError> {
        let config: LexiconConfig = toml::from_str(source)?;
        Self::from_config(&config)
    }

    /// Load a lexicon file
    pub fn from_file(path: &Path) -> Result<Self, LexiconError> {
        let source = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Compile a parsed configuration
    pub fn from_config(config: &LexiconConfig) -> Result<Self, LexiconError> {
        config.validate().map_err(LexiconError::Invalid)?;

        let mut informal = PatternTable::new();
        for entry in &config.informal {
            informal.push(
                &entry.pattern,
                InformalTerm {
                    term: entry.term.clone(),
                    replacement: entry.replacement.clone(),
                },
            )?;
        }

        let mut cliches = PatternTable::new();
        for entry in &config.cliches {
            cliches.push(&entry.pattern, entry.label.clone())?;
        }

        let mut vague = PatternTable::new();
        for entry in &config.vague {
            vague.push_guarded(&entry.pattern, entry.unless_followed_by.as_deref(), ())?;
        }

        let concordance = table::compile(&format!(
            r"\b({})\b[^.!?]{{0,{}}}\b({})\b",
            config.concordance.subjects.join("|"),
            config.concordance.max_gap,
            config.concordance.verbs.join("|"),
        ))?;

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            accents: config.accents.clone(),
            informal,
            cliches,
            vague,
            stopwords: config
                .stopwords
                .words
                .iter()
                .map(|w| w.to_lowercase())
                .collect(),
            concordance,
        })
    }

    /// Language code, e.g. `pt-BR`
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accented spelling for an unaccented lowercase word
    pub fn accent_fix(&self, word: &str) -> Option<&str> {
        self.accents.get(word).map(String::as_str)
    }

    /// Number of accent corrections
    pub fn accent_count(&self) -> usize {
        self.accents.len()
    }

    /// Informal-term patterns
    pub fn informal(&self) -> &PatternTable<InformalTerm> {
        &self.informal
    }

    /// Cliché patterns with their display labels
    pub fn cliches(&self) -> &PatternTable<String> {
        &self.cliches
    }

    /// Vague-expression patterns
    pub fn vague(&self) -> &PatternTable<()> {
        &self.vague
    }

    /// Whether `word` (lowercase) is a stop-word
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Plural subject followed by a singular verb
    pub fn concordance(&self) -> &Regex {
        &self.concordance
    }
}

/// TOML source of the embedded lexicon
pub fn embedded_source() -> &'static str {
    EMBEDDED_PT_BR
}
