//! Public analysis API
//!
//! [`Analyzer`] is the single entry point for callers: build one (or use
//! [`Analyzer::new`]), then call [`Analyzer::analyze`] for each text. The
//! analyzer is `Send + Sync` and may be shared across threads.

mod analyzer;
pub mod config;
mod output;

pub use analyzer::{Analyzer, AnalyzerBuilder};
pub use config::{
    AnalyzerConfig, AnalyzerConfigBuilder, ExternalConfig, LanguageToolConfig, RuleThresholds,
};
pub use output::{AnalysisResult, EngineStatus, Statistics};
