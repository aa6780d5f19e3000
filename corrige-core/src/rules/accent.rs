//! Missing accent marks

use std::collections::HashSet;

use super::{Rule, RuleContext};
use crate::finding::Finding;

const STRIP_CHARS: &[char] = &['.', ',', ';', ':', '!', '?', '(', ')', '"', '\''];

/// Flags unaccented spellings whose accented form never appears in the text.
///
/// A word written correctly anywhere else suppresses the flag for that word.
pub struct AccentRule;

impl Rule for AccentRule {
    fn id(&self) -> &'static str {
        "accents"
    }

    fn description(&self) -> &'static str {
        "Palavras que exigem acentuação gráfica"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<Finding> {
        let mut seen = HashSet::new();
        let mut missing = Vec::new();

        for word in &ctx.segments.words {
            let clean = word.to_lowercase();
            let clean = clean.trim_matches(STRIP_CHARS);
            if !seen.insert(clean.to_string()) {
                continue;
            }
            if let Some(correct) = ctx.lexicon.accent_fix(clean) {
                if !ctx.lowered.contains(&correct.to_lowercase()) {
                    missing.push(format!("\"{clean}\" → \"{correct}\""));
                }
            }
        }

        missing
            .chunks(ctx.thresholds.accent_chunk)
            .map(|chunk| {
                Finding::grammar(
                    format!("Palavras sem acentuação: {}", chunk.join(", ")),
                    "Essas palavras exigem acentuação gráfica conforme as regras do português.",
                )
            })
            .collect()
    }
}
