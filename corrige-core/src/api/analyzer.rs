//! The analysis entry point

use std::sync::Arc;

use crate::api::config::AnalyzerConfig;
use crate::api::output::{AnalysisResult, EngineStatus, Statistics};
use crate::error::Error;
use crate::external::{ExternalAdapter, GrammarChecker};
use crate::feedback::{self, FeedbackInputs};
use crate::finding::{Finding, FindingKind};
use crate::lexicon::Lexicon;
use crate::readability::{round1, Readability};
use crate::rules::{default_rules, Rule, RuleContext};
use crate::scoring::{self, GradeClass, ScoreInputs, MIN_GRADE};
use crate::splitter::Segments;

/// Lexicon the analyzer reads from
#[derive(Debug, Clone)]
enum LexiconHandle {
    Embedded(&'static Lexicon),
    Owned(Arc<Lexicon>),
}

impl LexiconHandle {
    fn get(&self) -> &Lexicon {
        match self {
            Self::Embedded(lexicon) => lexicon,
            Self::Owned(lexicon) => lexicon,
        }
    }
}

/// Runs the rule battery, the optional external checker, readability,
/// feedback and scoring over a text
pub struct Analyzer {
    config: AnalyzerConfig,
    lexicon: LexiconHandle,
    rules: Vec<Box<dyn Rule>>,
    external: Option<ExternalAdapter>,
}

impl Analyzer {
    /// Embedded lexicon, default thresholds, no external checker
    pub fn new() -> Self {
        Self {
            config: AnalyzerConfig::default(),
            lexicon: LexiconHandle::Embedded(Lexicon::embedded()),
            rules: default_rules(),
            external: None,
        }
    }

    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::default()
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        self.lexicon.get()
    }

    /// Rules in emission order
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Whether an external checker is configured
    pub fn has_external_tool(&self) -> bool {
        self.external.is_some()
    }

    /// Capability report
    pub fn status(&self) -> EngineStatus {
        EngineStatus {
            external_tool_available: self.external.is_some(),
            external_tool: self.external.as_ref().map(|e| e.name().to_string()),
            lexicon: self.lexicon().code().to_string(),
        }
    }

    /// Analyze `text`. Never fails: any string, the empty one included,
    /// yields a result.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let segments = Segments::split(text);
        let lowered = text.to_lowercase();
        let external_tool_available = self.external.is_some();

        let mut findings = self.check_external(text);

        let heuristic = {
            let ctx = RuleContext {
                original: text,
                lowered: &lowered,
                segments: &segments,
                lexicon: self.lexicon(),
                thresholds: &self.config.thresholds,
                external: &findings,
            };
            self.evaluate_rules(&ctx)
        };
        findings.extend(heuristic);

        let grammar_errors = count(&findings, FindingKind::Grammar);
        let style_errors = count(&findings, FindingKind::Style);
        let readability = Readability::measure(&segments);

        findings.extend(feedback::synthesize(&FeedbackInputs {
            word_count: segments.word_count(),
            paragraph_count: segments.paragraphs.len(),
            vocabulary_richness: readability.vocabulary_richness,
            grammar_count: grammar_errors,
            style_count: style_errors,
        }));

        log::debug!(
            "analyzed {} words: {} grammar, {} style, {} findings total",
            segments.word_count(),
            grammar_errors,
            style_errors,
            findings.len()
        );

        if segments.word_count() == 0 {
            return degenerate(findings, grammar_errors, style_errors, external_tool_available);
        }

        let score = scoring::score(&ScoreInputs {
            grammar_count: grammar_errors,
            style_count: style_errors,
            word_count: segments.word_count(),
            paragraph_count: segments.paragraphs.len(),
            vocabulary_richness: readability.vocabulary_richness,
            findings: &findings,
        });

        AnalysisResult {
            grade: score.grade,
            grade_label: score.label().to_string(),
            grade_class: score.class,
            statistics: Statistics {
                word_count: segments.word_count(),
                char_count: text.chars().count(),
                sentence_count: segments.sentences.len(),
                paragraph_count: segments.paragraphs.len(),
                avg_word_length: round1(readability.avg_word_length),
                avg_sentence_length: round1(readability.avg_sentence_length),
                vocabulary_richness: readability.vocabulary_richness,
                grammar_errors,
                style_errors,
                external_tool_available,
            },
            findings,
        }
    }

    fn check_external(&self, text: &str) -> Vec<Finding> {
        let Some(adapter) = &self.external else {
            return Vec::new();
        };
        match adapter.check(text) {
            Ok(found) => found,
            Err(e) => {
                log::warn!("{} check failed, continuing without it: {e}", adapter.name());
                Vec::new()
            }
        }
    }

    fn evaluate_rules(&self, ctx: &RuleContext<'_>) -> Vec<Finding> {
        #[cfg(feature = "parallel")]
        {
            if self.config.parallel {
                use rayon::prelude::*;

                // Collect per rule first so the merge keeps registry order
                let per_rule: Vec<Vec<Finding>> = self
                    .rules
                    .par_iter()
                    .map(|rule| run_rule(rule.as_ref(), ctx))
                    .collect();
                return per_rule.into_iter().flatten().collect();
            }
        }

        self.rules
            .iter()
            .flat_map(|rule| run_rule(rule.as_ref(), ctx))
            .collect()
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("config", &self.config)
            .field("lexicon", &self.lexicon().code())
            .field("rules", &self.rules.len())
            .field("external", &self.external)
            .finish()
    }
}

fn run_rule(rule: &dyn Rule, ctx: &RuleContext<'_>) -> Vec<Finding> {
    let found = rule.evaluate(ctx);
    log::trace!("rule {} produced {} finding(s)", rule.id(), found.len());
    found
}

fn count(findings: &[Finding], kind: FindingKind) -> usize {
    findings.iter().filter(|f| f.kind == kind).count()
}

/// Result for a text without words: zero text statistics, minimum grade.
/// Error counts still match the findings an external checker reported.
fn degenerate(
    findings: Vec<Finding>,
    grammar_errors: usize,
    style_errors: usize,
    external_tool_available: bool,
) -> AnalysisResult {
    let class = GradeClass::for_grade(MIN_GRADE);
    AnalysisResult {
        findings,
        grade: MIN_GRADE,
        grade_label: class.label().to_string(),
        grade_class: class,
        statistics: Statistics {
            grammar_errors,
            style_errors,
            external_tool_available,
            ..Default::default()
        },
    }
}

/// Builder for [`Analyzer`]
#[derive(Default)]
pub struct AnalyzerBuilder {
    config: Option<AnalyzerConfig>,
    lexicon: Option<Lexicon>,
    checker: Option<Box<dyn GrammarChecker>>,
    external: Option<ExternalAdapter>,
}

impl AnalyzerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom configuration
    pub fn config(mut self, config: AnalyzerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Replace the embedded lexicon
    pub fn lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Attach a grammar checker; it is wrapped with the configuration's
    /// external settings at build time
    pub fn checker(mut self, checker: Box<dyn GrammarChecker>) -> Self {
        self.checker = Some(checker);
        self
    }

    /// Attach a ready adapter, or none
    pub fn external(mut self, adapter: Option<ExternalAdapter>) -> Self {
        self.external = adapter;
        self
    }

    /// Build the analyzer
    pub fn build(self) -> Result<Analyzer, Error> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let lexicon = match self.lexicon {
            Some(lexicon) => LexiconHandle::Owned(Arc::new(lexicon)),
            None => LexiconHandle::Embedded(Lexicon::embedded()),
        };

        let external = match (self.external, self.checker) {
            (Some(adapter), _) => Some(adapter),
            (None, Some(checker)) => Some(ExternalAdapter::new(checker, config.external.clone())),
            (None, None) => None,
        };

        Ok(Analyzer {
            config,
            lexicon,
            rules: default_rules(),
            external,
        })
    }
}
