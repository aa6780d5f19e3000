//! External grammar checker boundary
//!
//! A [`GrammarChecker`] returns matches in a normalized native shape; the
//! [`ExternalAdapter`] filters, classifies and caps them into [`Finding`]s so
//! that nothing past this module depends on the checker's own types.
//!
//! The adapter is an optional capability: the analyzer holds an
//! `Option<ExternalAdapter>` and a failed call yields an error that is logged
//! and treated as "no findings this call".

#[cfg(feature = "languagetool")]
mod languagetool;

#[cfg(feature = "languagetool")]
pub use languagetool::LanguageToolClient;

use crate::api::config::{ExternalConfig, LanguageToolConfig};
use crate::error::CheckerError;
use crate::finding::{Finding, FindingKind};

/// Replacements shown in a suggestion
const MAX_REPLACEMENTS: usize = 3;

/// Category fragments classified as grammar; checked first
const GRAMMAR_CATEGORIES: &[&str] = &["gramm", "agreement", "syntax", "typo", "spell"];
/// Category fragments classified as style
const STYLE_CATEGORIES: &[&str] = &["style", "redundancy", "typography"];

const FALLBACK_MESSAGE: &str = "Erro detectado";
const FALLBACK_SUGGESTION: &str = "Revise este trecho.";

/// One match as reported by a grammar checker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternalMatch {
    /// Category identifier, e.g. `TYPOS` or `GRAMMAR`
    pub category: String,
    pub rule_id: String,
    pub message: String,
    /// Window of text around the error
    pub context: String,
    /// Character offset of the error in the checked text
    pub offset: usize,
    /// Character offset of the error inside `context`
    pub offset_in_context: usize,
    pub error_length: usize,
    /// Proposed corrections, best first
    pub replacements: Vec<String>,
}

/// A third-party grammar checker
pub trait GrammarChecker: Send + Sync {
    /// Display name of the checker
    fn name(&self) -> &str;

    /// Check `text` and return every match the checker reports
    fn check(&self, text: &str) -> Result<Vec<ExternalMatch>, CheckerError>;
}

/// Normalizes a checker's matches into findings
pub struct ExternalAdapter {
    checker: Box<dyn GrammarChecker>,
    config: ExternalConfig,
}

impl std::fmt::Debug for ExternalAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExternalAdapter")
            .field("checker", &self.checker.name())
            .field("config", &self.config)
            .finish()
    }
}

impl ExternalAdapter {
    pub fn new(checker: Box<dyn GrammarChecker>, config: ExternalConfig) -> Self {
        Self { checker, config }
    }

    /// Connect to a LanguageTool server.
    ///
    /// Returns `None` when the server cannot be reached or does not support
    /// the configured language; the analyzer then runs without it.
    #[cfg(feature = "languagetool")]
    pub fn try_languagetool(
        settings: &LanguageToolConfig,
        config: ExternalConfig,
    ) -> Option<Self> {
        match LanguageToolClient::connect(settings) {
            Ok(client) => {
                log::info!(
                    "LanguageTool connected at {} ({})",
                    settings.url,
                    settings.language
                );
                Some(Self::new(Box::new(client), config))
            }
            Err(e) => {
                log::warn!("LanguageTool unavailable at {}: {e}", settings.url);
                None
            }
        }
    }

    /// Without the `languagetool` feature there is no client to connect.
    #[cfg(not(feature = "languagetool"))]
    pub fn try_languagetool(
        settings: &LanguageToolConfig,
        _config: ExternalConfig,
    ) -> Option<Self> {
        log::warn!(
            "LanguageTool support not compiled in; ignoring {}",
            settings.url
        );
        None
    }

    /// Name of the wrapped checker
    pub fn name(&self) -> &str {
        self.checker.name()
    }

    /// Check `text` and normalize the result
    pub fn check(&self, text: &str) -> Result<Vec<Finding>, CheckerError> {
        let matches = self.checker.check(text)?;
        Ok(self.normalize(&matches))
    }

    /// Filter, classify and cap raw matches
    pub fn normalize(&self, matches: &[ExternalMatch]) -> Vec<Finding> {
        matches
            .iter()
            .filter(|m| !self.config.ignored_rules.iter().any(|r| *r == m.rule_id))
            .take(self.config.max_findings)
            .map(to_finding)
            .collect()
    }
}

fn to_finding(m: &ExternalMatch) -> Finding {
    let base = if m.message.is_empty() {
        FALLBACK_MESSAGE
    } else {
        m.message.as_str()
    };
    let excerpt = excerpt(&m.context, m.offset_in_context, m.error_length);
    let message = if excerpt.is_empty() {
        base.to_string()
    } else {
        format!("\"{excerpt}\" — {base}")
    };

    let suggestion = if m.replacements.is_empty() {
        FALLBACK_SUGGESTION.to_string()
    } else {
        let top: Vec<&str> = m
            .replacements
            .iter()
            .take(MAX_REPLACEMENTS)
            .map(String::as_str)
            .collect();
        format!("Sugestão: {}", top.join(", "))
    };

    Finding::external(
        classify(&m.category),
        message,
        suggestion,
        m.offset,
        m.error_length,
    )
}

/// Grammar unless the category reads as a style category
pub fn classify(category: &str) -> FindingKind {
    let category = category.to_lowercase();
    if GRAMMAR_CATEGORIES.iter().any(|k| category.contains(k)) {
        FindingKind::Grammar
    } else if STYLE_CATEGORIES.iter().any(|k| category.contains(k)) {
        FindingKind::Style
    } else {
        FindingKind::Grammar
    }
}

/// Characters `[offset, offset + length)` of `context`, or empty when the
/// span runs past its end
pub fn excerpt(context: &str, offset: usize, length: usize) -> String {
    match offset.checked_add(length) {
        Some(end) if end <= context.chars().count() => {
            context.chars().skip(offset).take(length).collect()
        }
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(rule_id: &str, category: &str) -> ExternalMatch {
        ExternalMatch {
            category: category.to_string(),
            rule_id: rule_id.to_string(),
            message: "Possível erro ortográfico.".to_string(),
            context: "Hoje nao vou".to_string(),
            offset: 5,
            offset_in_context: 5,
            error_length: 3,
            replacements: vec!["não".into(), "nano".into(), "nado".into(), "naco".into()],
        }
    }

    struct Canned(Vec<ExternalMatch>);

    impl GrammarChecker for Canned {
        fn name(&self) -> &str {
            "canned"
        }

        fn check(&self, _text: &str) -> Result<Vec<ExternalMatch>, CheckerError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_classification() {
        assert_eq!(classify("TYPOS"), FindingKind::Grammar);
        assert_eq!(classify("GRAMMAR"), FindingKind::Grammar);
        assert_eq!(classify("Concordância AGREEMENT"), FindingKind::Grammar);
        assert_eq!(classify("STYLE"), FindingKind::Style);
        assert_eq!(classify("REDUNDANCY"), FindingKind::Style);
        // "typography" contains "typo", which is checked first
        assert_eq!(classify("TYPOGRAPHY"), FindingKind::Grammar);
        assert_eq!(classify("MISC"), FindingKind::Grammar);
        assert_eq!(classify(""), FindingKind::Grammar);
    }

    #[test]
    fn test_excerpt_counts_characters() {
        assert_eq!(excerpt("Você nao vai", 5, 3), "nao");
        assert_eq!(excerpt("ação", 0, 4), "ação");
        assert_eq!(excerpt("curto", 3, 5), "");
        assert_eq!(excerpt("", 0, 0), "");
        assert_eq!(excerpt("x", usize::MAX, 2), "");
    }

    #[test]
    fn test_finding_shape() {
        let adapter = ExternalAdapter::new(Box::new(Canned(vec![])), ExternalConfig::default());
        let findings = adapter.normalize(&[sample("HUNSPELL_RULE", "TYPOS")]);
        assert_eq!(findings.len(), 1);
        let f = &findings[0];
        assert_eq!(f.kind, FindingKind::Grammar);
        assert_eq!(f.message, "\"nao\" — Possível erro ortográfico.");
        assert_eq!(f.suggestion, "Sugestão: não, nano, nado");
        assert_eq!(f.offset, Some(5));
        assert_eq!(f.length, Some(3));
    }

    #[test]
    fn test_fallback_message_and_suggestion() {
        let adapter = ExternalAdapter::new(Box::new(Canned(vec![])), ExternalConfig::default());
        let m = ExternalMatch {
            context: "ab".into(),
            offset_in_context: 1,
            error_length: 5,
            ..Default::default()
        };
        let f = &adapter.normalize(&[m])[0];
        assert_eq!(f.message, "Erro detectado");
        assert_eq!(f.suggestion, "Revise este trecho.");
    }

    #[test]
    fn test_ignored_rules_and_cap() {
        let mut matches = vec![sample("WHITESPACE_RULE", "TYPOGRAPHY")];
        matches.extend((0..30).map(|_| sample("HUNSPELL_RULE", "TYPOS")));
        let adapter = ExternalAdapter::new(Box::new(Canned(matches)), ExternalConfig::default());
        let findings = adapter.check("texto").unwrap();
        assert_eq!(findings.len(), 20);
        assert!(findings.iter().all(|f| f.message.contains("ortográfico")));
    }

    #[test]
    fn test_adapter_debug_names_checker() {
        let adapter = ExternalAdapter::new(Box::new(Canned(vec![])), ExternalConfig::default());
        assert_eq!(adapter.name(), "canned");
        assert!(format!("{adapter:?}").contains("canned"));
    }
}
