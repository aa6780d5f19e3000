//! Excessive word repetition

use std::collections::HashMap;

use super::{Rule, RuleContext};
use crate::finding::Finding;

const PORTUGUESE_LETTERS: &str = "abcdefghijklmnopqrstuvwxyzáàâãéèêíïóôõúüç";

/// Content words used too often
pub struct RepetitionRule;

impl Rule for RepetitionRule {
    fn id(&self) -> &'static str {
        "repetition"
    }

    fn description(&self) -> &'static str {
        "Repetição excessiva de palavras"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<Finding> {
        let t = ctx.thresholds;

        // Counts kept in order of first appearance
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut counts: Vec<(String, usize)> = Vec::new();

        for word in &ctx.segments.words {
            let clean: String = word
                .to_lowercase()
                .chars()
                .filter(|c| PORTUGUESE_LETTERS.contains(*c))
                .collect();
            if clean.chars().count() <= t.repetition_min_word_len
                || ctx.lexicon.is_stopword(&clean)
            {
                continue;
            }
            match index.get(&clean) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(clean.clone(), counts.len());
                    counts.push((clean, 1));
                }
            }
        }

        let repeated: Vec<String> = counts
            .iter()
            .filter(|(_, count)| *count >= t.repetition_min_count)
            .take(t.repetition_listed)
            .map(|(word, count)| format!("\"{word}\" ({count}x)"))
            .collect();

        if repeated.is_empty() {
            return Vec::new();
        }

        vec![Finding::style(
            format!("Repetição excessiva: {}", repeated.join(", ")),
            "Use sinônimos ou reformule frases para evitar repetição e enriquecer o vocabulário.",
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::run;

    #[test]
    fn test_word_repeated_four_times() {
        let text = "A escola, a escola! Escola? ESCOLA.";
        let findings = run(&RepetitionRule, text);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].message, "Repetição excessiva: \"escola\" (4x)");
    }

    #[test]
    fn test_three_times_is_fine() {
        assert!(run(&RepetitionRule, "escola escola escola").is_empty());
    }

    #[test]
    fn test_short_words_and_stopwords_ignored() {
        // "casa" has four letters and counts; "mais" is a stop-word
        assert!(run(&RepetitionRule, "mais mais mais mais sol sol sol sol").is_empty());
        assert_eq!(run(&RepetitionRule, "casa casa casa casa").len(), 1);
    }

    #[test]
    fn test_at_most_five_words_listed() {
        let text = ["alfa", "beta", "gama", "delta", "épsilon", "zeta"]
            .iter()
            .map(|w| vec![*w; 4].join(" "))
            .collect::<Vec<_>>()
            .join(" ");
        let findings = run(&RepetitionRule, &text);
        assert_eq!(findings[0].message.matches("(4x)").count(), 5);
        assert!(!findings[0].message.contains("zeta"));
    }
}
