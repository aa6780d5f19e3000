//! Phrase tables: informal register, clichés and vague expressions
//!
//! Each rule walks its lexicon table and reports every matching entry in a
//! single finding.

use super::{Rule, RuleContext};
use crate::finding::Finding;

/// Chat slang, abbreviations and laughter
pub struct InformalRule;

impl Rule for InformalRule {
    fn id(&self) -> &'static str {
        "informal"
    }

    fn description(&self) -> &'static str {
        "Linguagem informal e internetês"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<Finding> {
        let found: Vec<String> = ctx
            .lexicon
            .informal()
            .matches(ctx.lowered)
            .map(|(term, _)| format!("{} → {}", term.term, term.replacement))
            .collect();

        if found.is_empty() {
            return Vec::new();
        }

        let cap = ctx.thresholds.informal_display_cap;
        let shown = &found[..found.len().min(cap)];
        let ellipsis = if found.len() > cap { "..." } else { "" };

        vec![Finding::grammar(
            format!(
                "Linguagem informal / internetês detectada ({} ocorrências)",
                found.len()
            ),
            format!("Em textos formais, evite: {}{ellipsis}.", shown.join(", ")),
        )]
    }
}

/// Stock phrases
pub struct ClicheRule;

impl Rule for ClicheRule {
    fn id(&self) -> &'static str {
        "cliches"
    }

    fn description(&self) -> &'static str {
        "Expressões clichê"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<Finding> {
        let found: Vec<&str> = ctx
            .lexicon
            .cliches()
            .matches(ctx.lowered)
            .map(|(label, _)| label.as_str())
            .collect();

        if found.is_empty() {
            return Vec::new();
        }

        vec![Finding::style(
            format!("Expressões clichê encontradas: {}", found.join(", ")),
            "Clichês enfraquecem a argumentação. Substitua por conectivos e expressões mais originais e específicas.",
        )]
    }
}

/// Non-specific phrasing; reports the literal matched text
pub struct VagueRule;

impl Rule for VagueRule {
    fn id(&self) -> &'static str {
        "vague"
    }

    fn description(&self) -> &'static str {
        "Expressões vagas"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<Finding> {
        let found: Vec<String> = ctx
            .lexicon
            .vague()
            .matches(ctx.lowered)
            .map(|(_, literal)| format!("\"{literal}\""))
            .collect();

        if found.is_empty() {
            return Vec::new();
        }

        vec![Finding::style(
            format!("Expressões vagas detectadas: {}", found.join(", ")),
            "Seja mais específico. Ao invés de 'alguma coisa', descreva exatamente o que propõe.",
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::FindingKind;
    use crate::rules::test_support::run;

    #[test]
    fn test_informal_terms_listed() {
        let findings = run(&InformalRule, "Hoje nao vou la pq tah chovendo mt.");
        assert_eq!(findings.len(), 1);
        let finding = &findings[0];
        assert_eq!(finding.kind, FindingKind::Grammar);
        assert!(finding.message.contains("(2 ocorrências)"));
        assert!(finding.suggestion.contains("\"pq\" → \"porque\""));
        assert!(finding.suggestion.contains("\"mt\" → \"muito\""));
        assert!(!finding.suggestion.contains("tah"));
    }

    #[test]
    fn test_informal_display_capped_at_eight() {
        let text = "vc pq tbm tb mt blz flw pfv obg mds";
        let findings = run(&InformalRule, text);
        let finding = &findings[0];
        assert!(finding.message.contains("(10 ocorrências)"));
        assert_eq!(finding.suggestion.matches('→').count(), 8);
        assert!(finding.suggestion.ends_with("\"por favor\"...."));
        assert!(!finding.suggestion.contains("\"mds\""));
    }

    #[test]
    fn test_informal_case_insensitive() {
        assert_eq!(run(&InformalRule, "VC viu isso?").len(), 1);
    }

    #[test]
    fn test_formal_text_has_no_informal_finding() {
        assert!(run(&InformalRule, "Você viu isso? Porque é muito importante.").is_empty());
    }

    #[test]
    fn test_cliches_listed_in_table_order() {
        let text = "Sendo assim, nos dias de hoje tudo mudou.";
        let findings = run(&ClicheRule, text);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::Style);
        assert_eq!(
            findings[0].message,
            "Expressões clichê encontradas: \"nos dias de hoje\", \"sendo assim\""
        );
    }

    #[test]
    fn test_cliche_with_accent_variants() {
        assert_eq!(run(&ClicheRule, "Em pleno século XXI isso persiste.").len(), 1);
        assert_eq!(run(&ClicheRule, "Em pleno seculo 21 isso persiste.").len(), 1);
    }

    #[test]
    fn test_vague_reports_literal_text() {
        let findings = run(&VagueRule, "Precisamos fazer algo. Várias coisas podem mudar.");
        assert_eq!(findings.len(), 1);
        assert_eq!(
            findings[0].message,
            "Expressões vagas detectadas: \"fazer algo\", \"várias coisas\""
        );
    }

    #[test]
    fn test_vague_guard() {
        assert!(run(&VagueRule, "Esse problema de mobilidade afeta todos.").is_empty());
        assert_eq!(run(&VagueRule, "Esse problema afeta todos.").len(), 1);
    }
}
