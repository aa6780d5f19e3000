//! End-to-end tests for the complete analysis pipeline

use corrige_core::scoring::{raw_grade, ScoreInputs};
use corrige_core::{Analyzer, FindingKind, FindingSource, GradeClass};

const CLEAN_ESSAY: &str = include_str!("fixtures/clean_essay.txt");

#[test]
fn test_short_informal_unaccented_text() {
    let text = "Hoje nao vou la pq tah chovendo mt.";
    let result = Analyzer::new().analyze(text);

    let grammar: Vec<_> = result.findings_of(FindingKind::Grammar).collect();
    assert_eq!(grammar.len(), 2);
    assert!(grammar[0].message.contains("\"nao\" → \"não\""));
    assert!(grammar[1].message.contains("informal"));
    assert!(grammar[1].suggestion.contains("\"pq\""));
    assert!(grammar[1].suggestion.contains("\"mt\""));
    assert!(!grammar[1].suggestion.contains("tah"));

    assert!(result
        .findings_of(FindingKind::Tip)
        .any(|f| f.message == "Texto muito curto (8 palavras)"));

    // 10 - 2 * 0.8 + 0.2 (vocabulary) - 1.5 (informal register)
    assert_eq!(result.grade, 7.1);
    assert!(result.grade < 10.0);

    let without_informal: Vec<_> = result
        .findings
        .iter()
        .filter(|f| !f.mentions("informal"))
        .cloned()
        .collect();
    let inputs = ScoreInputs {
        grammar_count: result.statistics.grammar_errors,
        style_count: result.statistics.style_errors,
        word_count: result.statistics.word_count,
        paragraph_count: result.statistics.paragraph_count,
        vocabulary_richness: result.statistics.vocabulary_richness,
        findings: &result.findings,
    };
    let relieved = ScoreInputs {
        findings: &without_informal,
        ..inputs
    };
    assert!((raw_grade(&relieved) - raw_grade(&inputs) - 1.5).abs() < 1e-9);
}

#[test]
fn test_clean_essay_scores_top_grade() {
    let result = Analyzer::new().analyze(CLEAN_ESSAY);

    assert_eq!(result.statistics.grammar_errors, 0, "{:#?}", result.findings);
    assert_eq!(result.statistics.style_errors, 0, "{:#?}", result.findings);
    assert_eq!(result.statistics.paragraph_count, 4);
    assert!(result.statistics.word_count >= 200);
    assert_eq!(result.grade, 10.0);
    assert_eq!(result.grade_class, GradeClass::High);
    assert_eq!(result.grade_label, "Bom trabalho! Texto com boa qualidade.");

    let tips: Vec<_> = result.findings.iter().map(|f| f.message.as_str()).collect();
    assert!(tips[0].starts_with("Bom volume de texto"));
    assert_eq!(tips[1], "Boa estrutura de parágrafos (4 parágrafos)");
    assert!(tips[2].starts_with("Vocabulário diversificado"));
    assert_eq!(tips[3], "Nenhum erro significativo encontrado");
}

#[test]
fn test_empty_string() {
    let result = Analyzer::new().analyze("");
    assert_eq!(result.statistics.word_count, 0);
    assert_eq!(result.statistics.sentence_count, 0);
    assert_eq!(result.statistics.paragraph_count, 0);
    assert_eq!(result.statistics.avg_word_length, 0.0);
    assert_eq!(result.statistics.vocabulary_richness, 0.0);
    assert_eq!(result.grade, 0.5);
    assert_eq!(result.grade_class, GradeClass::Low);
    assert!(result
        .findings
        .iter()
        .any(|f| f.kind == FindingKind::Tip && f.message.starts_with("Texto muito curto")));
}

#[test]
fn test_without_external_tool_only_heuristic_findings() {
    let text = "Nos dias de hoje os jovens precisa de apoio. vc sabe disso";
    let result = Analyzer::new().analyze(text);
    assert!(!result.statistics.external_tool_available);
    assert!(result
        .findings
        .iter()
        .all(|f| f.source == FindingSource::Heuristic && f.offset.is_none()));
}

#[test]
fn test_emission_order_follows_registry() {
    let text = "Nos dias de hoje os alunos precisa de educacao. vc sabe disso";
    let result = Analyzer::new().analyze(text);
    let messages: Vec<_> = result.findings.iter().map(|f| f.message.as_str()).collect();

    let position = |prefix: &str| {
        messages
            .iter()
            .position(|m| m.starts_with(prefix))
            .unwrap_or_else(|| panic!("missing finding starting with {prefix:?}: {messages:#?}"))
    };

    let accents = position("Palavras sem acentuação");
    let concordance = position("Possível erro de concordância");
    let informal = position("Linguagem informal");
    let cliches = position("Expressões clichê");
    let punctuation = position("Texto não termina");
    let lowercase = position("1 frase(s) iniciando");
    let closing = position("Continue praticando!");

    assert!(accents < concordance);
    assert!(concordance < informal);
    assert!(informal < cliches);
    assert!(cliches < punctuation);
    assert!(punctuation < lowercase);
    assert_eq!(closing, messages.len() - 1);
}

#[test]
fn test_statistics_are_rounded() {
    let result = Analyzer::new().analyze("Um texto curto. Com três frases! Será?");
    let stats = &result.statistics;
    assert_eq!(stats.word_count, 7);
    assert_eq!(stats.sentence_count, 3);
    assert_eq!(stats.paragraph_count, 1);
    assert_eq!(stats.avg_sentence_length, 2.3);
    assert_eq!(stats.char_count, 38);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["stats"]["vocabulary_richness"], 100.0);
}

#[test]
fn test_statistics_round_ties_to_even() {
    // 5 words over 4 sentences is 1.25
    let result = Analyzer::new().analyze("A. B. C. D e.");
    assert_eq!(result.statistics.sentence_count, 4);
    assert_eq!(result.statistics.avg_sentence_length, 1.2);

    // one distinct word out of 16 is 6.25%
    let repeated = vec!["casa"; 16].join(" ");
    let result = Analyzer::new().analyze(&repeated);
    assert_eq!(result.statistics.vocabulary_percentage(), 6.2);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["stats"]["vocabulary_richness"], 6.2);
}

#[test]
fn test_analyzer_is_shareable_across_threads() {
    let analyzer = std::sync::Arc::new(Analyzer::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let analyzer = analyzer.clone();
            std::thread::spawn(move || analyzer.analyze(CLEAN_ESSAY).grade)
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 10.0);
    }
}
