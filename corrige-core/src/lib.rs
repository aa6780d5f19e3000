//! Rule-based analysis engine for Portuguese prose
//!
//! Takes a block of text and produces a structured critique: classified
//! findings (grammar, style, tips), readability statistics and a composite
//! grade in `[0.5, 10.0]`. There is no model behind it; every judgment is a
//! lexicon lookup or a pattern heuristic.
//!
//! # Pipeline
//!
//! 1. [`splitter`] segments the text into words, sentences and paragraphs
//! 2. the optional [`external`] checker reports its own matches
//! 3. the [`rules`] battery runs over the segments and the [`lexicon`]
//! 4. [`readability`] metrics and [`feedback`] tips are derived
//! 5. [`scoring`] turns counts and metrics into a grade
//!
//! # Example
//!
//! ```rust
//! use corrige_core::{Analyzer, FindingKind};
//!
//! let analyzer = Analyzer::new();
//! let result = analyzer.analyze("Hoje nao vou la pq tah chovendo mt.");
//!
//! assert!(result.statistics.grammar_errors >= 2);
//! assert!(result.findings.iter().any(|f| f.kind == FindingKind::Tip));
//! assert!(result.grade < 10.0);
//! ```

pub mod api;
pub mod error;
pub mod external;
pub mod feedback;
pub mod finding;
pub mod lexicon;
pub mod readability;
pub mod rules;
pub mod scoring;
pub mod splitter;

pub use api::{
    AnalysisResult, Analyzer, AnalyzerBuilder, AnalyzerConfig, AnalyzerConfigBuilder,
    EngineStatus, ExternalConfig, LanguageToolConfig, RuleThresholds, Statistics,
};
pub use error::{CheckerError, Error, LexiconError, Result};
pub use external::{ExternalAdapter, ExternalMatch, GrammarChecker};
pub use finding::{Finding, FindingKind, FindingSource};
pub use lexicon::Lexicon;
pub use scoring::GradeClass;

#[cfg(feature = "languagetool")]
pub use external::LanguageToolClient;
