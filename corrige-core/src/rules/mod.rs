//! Rule evaluators
//!
//! Each rule is a pure function of the segmented text and the lexicon. Rules
//! share no mutable state, so they may run concurrently; the analyzer merges
//! their output back in registry order.

mod accent;
mod concordance;
mod phrases;
mod repetition;
mod structure;

pub use accent::AccentRule;
pub use concordance::ConcordanceRule;
pub use phrases::{ClicheRule, InformalRule, VagueRule};
pub use repetition::RepetitionRule;
pub use structure::{
    CommaDensityRule, LongSentenceRule, LowercaseStartRule, ParagraphBreakRule,
    TerminalPunctuationRule,
};

use crate::api::config::RuleThresholds;
use crate::finding::Finding;
use crate::lexicon::Lexicon;
use crate::splitter::Segments;

/// Everything a rule may look at
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// The text as submitted
    pub original: &'a str,
    /// The text lowercased
    pub lowered: &'a str,
    pub segments: &'a Segments<'a>,
    pub lexicon: &'a Lexicon,
    pub thresholds: &'a RuleThresholds,
    /// Findings already reported by the external checker
    pub external: &'a [Finding],
}

/// A heuristic rule family
pub trait Rule: Send + Sync {
    /// Stable identifier
    fn id(&self) -> &'static str;

    /// Short description for listings
    fn description(&self) -> &'static str;

    /// Evaluate the rule; zero or more findings
    fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<Finding>;
}

/// The built-in rules in emission order
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(AccentRule),
        Box::new(ConcordanceRule),
        Box::new(InformalRule),
        Box::new(ClicheRule),
        Box::new(VagueRule),
        Box::new(TerminalPunctuationRule),
        Box::new(CommaDensityRule),
        Box::new(ParagraphBreakRule),
        Box::new(LongSentenceRule),
        Box::new(LowercaseStartRule),
        Box::new(RepetitionRule),
    ]
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Run one rule over `text` with the embedded lexicon and default thresholds
    pub fn run(rule: &dyn Rule, text: &str) -> Vec<Finding> {
        run_with_external(rule, text, &[])
    }

    pub fn run_with_external(rule: &dyn Rule, text: &str, external: &[Finding]) -> Vec<Finding> {
        let lowered = text.to_lowercase();
        let segments = Segments::split(text);
        let thresholds = RuleThresholds::default();
        let ctx = RuleContext {
            original: text,
            lowered: &lowered,
            segments: &segments,
            lexicon: Lexicon::embedded(),
            thresholds: &thresholds,
            external,
        };
        rule.evaluate(&ctx)
    }
}
