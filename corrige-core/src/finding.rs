//! Findings: classified issues and tips

use serde::{Deserialize, Serialize};

/// Classification of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingKind {
    /// Grammar, spelling or register problem
    Grammar,
    /// Style problem
    Style,
    /// Encouragement or advice, never counted as an error
    Tip,
}

/// Where a finding came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FindingSource {
    /// The external grammar checker
    #[serde(rename = "languagetool")]
    ExternalTool,
    /// One of the built-in rules
    #[serde(rename = "custom")]
    Heuristic,
}

/// One detected issue or tip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    #[serde(rename = "type")]
    pub kind: FindingKind,
    #[serde(rename = "text")]
    pub message: String,
    pub suggestion: String,
    pub source: FindingSource,
    /// Character offset into the analysed text (external findings only)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub offset: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub length: Option<usize>,
}

impl Finding {
    /// Finding produced by a built-in rule
    pub fn heuristic(
        kind: FindingKind,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            suggestion: suggestion.into(),
            source: FindingSource::Heuristic,
            offset: None,
            length: None,
        }
    }

    pub fn grammar(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self::heuristic(FindingKind::Grammar, message, suggestion)
    }

    pub fn style(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self::heuristic(FindingKind::Style, message, suggestion)
    }

    pub fn tip(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self::heuristic(FindingKind::Tip, message, suggestion)
    }

    /// Finding reported by the external grammar checker
    pub fn external(
        kind: FindingKind,
        message: impl Into<String>,
        suggestion: impl Into<String>,
        offset: usize,
        length: usize,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            suggestion: suggestion.into(),
            source: FindingSource::ExternalTool,
            offset: Some(offset),
            length: Some(length),
        }
    }

    /// Case-insensitive substring test on the message
    pub fn mentions(&self, needle: &str) -> bool {
        self.message.to_lowercase().contains(&needle.to_lowercase())
    }
}
