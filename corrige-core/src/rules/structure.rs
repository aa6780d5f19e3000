//! Structural probes: punctuation, paragraphing, sentence shape

use super::{Rule, RuleContext};
use crate::finding::Finding;

/// Lowercase letters that may start a Portuguese sentence
const LOWERCASE_INITIALS: &str = "abcdefghijklmnopqrstuvwxyzáàâãéèêíïóôõúüç";

/// Text must end with `.`, `!` or `?`
pub struct TerminalPunctuationRule;

impl Rule for TerminalPunctuationRule {
    fn id(&self) -> &'static str {
        "terminal_punctuation"
    }

    fn description(&self) -> &'static str {
        "Texto sem pontuação final"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<Finding> {
        let trimmed = ctx.original.trim();
        if trimmed.is_empty() || trimmed.ends_with(['.', '!', '?']) {
            return Vec::new();
        }
        vec![Finding::style(
            "Texto não termina com pontuação final",
            "Finalize com ponto final, interrogação ou exclamação.",
        )]
    }
}

/// Long texts need commas
pub struct CommaDensityRule;

impl Rule for CommaDensityRule {
    fn id(&self) -> &'static str {
        "comma_density"
    }

    fn description(&self) -> &'static str {
        "Poucas vírgulas para o tamanho do texto"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<Finding> {
        let t = ctx.thresholds;
        let commas = ctx.original.matches(',').count();
        if ctx.segments.word_count() <= t.comma_min_words || commas >= t.comma_min_count {
            return Vec::new();
        }
        vec![Finding::style(
            "Poucas vírgulas para o tamanho do texto",
            "Use vírgulas para separar orações, adjuntos deslocados e enumerações. Isso melhora a leitura.",
        )]
    }
}

/// Long texts need paragraph breaks
pub struct ParagraphBreakRule;

impl Rule for ParagraphBreakRule {
    fn id(&self) -> &'static str {
        "paragraph_breaks"
    }

    fn description(&self) -> &'static str {
        "Texto sem divisão em parágrafos"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<Finding> {
        if ctx.segments.paragraphs.len() != 1
            || ctx.segments.word_count() <= ctx.thresholds.paragraph_min_words
        {
            return Vec::new();
        }
        vec![Finding::style(
            "Texto sem divisão em parágrafos",
            "Divida em parágrafos: introdução, desenvolvimento (2-3 parágrafos) e conclusão. Cada parágrafo deve ter uma ideia central.",
        )]
    }
}

/// Sentences over the word limit
pub struct LongSentenceRule;

impl Rule for LongSentenceRule {
    fn id(&self) -> &'static str {
        "long_sentences"
    }

    fn description(&self) -> &'static str {
        "Frases longas demais"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<Finding> {
        let limit = ctx.thresholds.long_sentence_words;
        let long = ctx
            .segments
            .sentences
            .iter()
            .filter(|s| s.split_whitespace().count() > limit)
            .count();
        if long == 0 {
            return Vec::new();
        }
        vec![Finding::style(
            format!("{long} frase(s) com mais de {limit} palavras"),
            "Frases longas demais dificultam a compreensão. Divida em períodos menores.",
        )]
    }
}

/// Sentences after the first that start in lowercase
pub struct LowercaseStartRule;

impl Rule for LowercaseStartRule {
    fn id(&self) -> &'static str {
        "lowercase_starts"
    }

    fn description(&self) -> &'static str {
        "Frases iniciando com letra minúscula"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<Finding> {
        let count = ctx
            .segments
            .sentences
            .iter()
            .skip(1)
            .filter(|s| {
                s.chars()
                    .next()
                    .is_some_and(|c| LOWERCASE_INITIALS.contains(c))
            })
            .count();
        if count == 0 {
            return Vec::new();
        }
        vec![Finding::grammar(
            format!("{count} frase(s) iniciando com letra minúscula"),
            "Toda frase deve começar com letra maiúscula após pontuação final.",
        )]
    }
}
