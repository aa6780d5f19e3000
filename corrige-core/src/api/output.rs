//! Output types for the analysis API

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::finding::{Finding, FindingKind};
use crate::scoring::GradeClass;

/// Numeric profile of an analysed text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub word_count: usize,
    /// Characters in the submitted text
    pub char_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    /// Mean characters per word, one decimal
    pub avg_word_length: f64,
    /// Mean words per sentence, one decimal
    pub avg_sentence_length: f64,
    /// Ratio in `[0, 1]`; serialized as a percentage with one decimal
    #[serde(
        serialize_with = "serialize_percentage",
        deserialize_with = "deserialize_percentage"
    )]
    pub vocabulary_richness: f64,
    /// Grammar-kind findings, external ones included
    pub grammar_errors: usize,
    pub style_errors: usize,
    /// Whether the external checker took part in this run
    #[serde(rename = "has_language_tool")]
    pub external_tool_available: bool,
}

impl Statistics {
    /// Vocabulary richness as a percentage, one decimal
    pub fn vocabulary_percentage(&self) -> f64 {
        crate::readability::round1(self.vocabulary_richness * 100.0)
    }
}

fn serialize_percentage<S: Serializer>(ratio: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(crate::readability::round1(ratio * 100.0))
}

fn deserialize_percentage<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    f64::deserialize(deserializer).map(|pct| pct / 100.0)
}

/// Result of one `analyze` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Findings in emission order: external, heuristic, tips
    #[serde(rename = "errors")]
    pub findings: Vec<Finding>,
    /// Grade in `[0.5, 10.0]` with one decimal
    pub grade: f64,
    pub grade_label: String,
    pub grade_class: GradeClass,
    #[serde(rename = "stats")]
    pub statistics: Statistics,
}

impl AnalysisResult {
    /// Findings of one kind, in order
    pub fn findings_of(&self, kind: FindingKind) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.kind == kind)
    }

    /// Grammar and style findings
    pub fn error_count(&self) -> usize {
        self.statistics.grammar_errors + self.statistics.style_errors
    }
}

/// Capability report for the calling shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStatus {
    pub external_tool_available: bool,
    /// Name of the external checker, when one is configured
    pub external_tool: Option<String>,
    /// Code of the loaded lexicon
    pub lexicon: String,
}
