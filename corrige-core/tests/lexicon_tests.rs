//! Loading custom lexicons from disk

use corrige_core::lexicon::embedded_source;
use corrige_core::{Analyzer, Lexicon, LexiconError};
use std::io::Write;
use tempfile::NamedTempFile;

const MINIMAL: &str = r#"
[metadata]
code = "pt-PT"
name = "Português (Portugal)"

[accents]
"facto" = "fato"

[[informal]]
pattern = '\bfixe\b'
term = '"fixe"'
replacement = '"ótimo"'

[concordance]
subjects = ["os"]
verbs = ["tem"]
"#;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_embedded_source_round_trips() {
    let lexicon = Lexicon::from_toml_str(embedded_source()).unwrap();
    assert_eq!(lexicon.code(), Lexicon::embedded().code());
    assert_eq!(lexicon.accent_count(), Lexicon::embedded().accent_count());
}

#[test]
fn test_custom_lexicon_drives_analysis() {
    let file = write_temp(MINIMAL);
    let lexicon = Lexicon::from_file(file.path()).unwrap();
    assert_eq!(lexicon.code(), "pt-PT");

    let analyzer = Analyzer::builder().lexicon(lexicon).build().unwrap();
    assert_eq!(analyzer.status().lexicon, "pt-PT");

    let result = analyzer.analyze("Isso é fixe, de facto.");
    let messages: Vec<_> = result.findings.iter().map(|f| f.message.as_str()).collect();
    assert!(messages.iter().any(|m| m.contains("\"facto\" → \"fato\"")));
    assert!(messages.iter().any(|m| m.starts_with("Linguagem informal")));
    // Terms from the embedded table are not known to this lexicon
    assert!(!Analyzer::builder()
        .lexicon(Lexicon::from_file(file.path()).unwrap())
        .build()
        .unwrap()
        .analyze("vc sabe.")
        .findings
        .iter()
        .any(|f| f.message.starts_with("Linguagem informal")));
}

#[test]
fn test_missing_file() {
    let err = Lexicon::from_file(std::path::Path::new("/nonexistent/lexicon.toml")).unwrap_err();
    assert!(matches!(err, LexiconError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/lexicon.toml"));
}

#[test]
fn test_malformed_toml() {
    let file = write_temp("[metadata\ncode = ");
    let err = Lexicon::from_file(file.path()).unwrap_err();
    assert!(matches!(err, LexiconError::Parse(_)));
}

#[test]
fn test_validation_failures() {
    let uppercase_key = MINIMAL.replace("\"facto\"", "\"Facto\"");
    assert!(matches!(
        Lexicon::from_toml_str(&uppercase_key),
        Err(LexiconError::Invalid(_))
    ));

    let no_verbs = MINIMAL.replace("verbs = [\"tem\"]", "verbs = []");
    assert!(matches!(
        Lexicon::from_toml_str(&no_verbs),
        Err(LexiconError::Invalid(_))
    ));

    let empty_code = MINIMAL.replace("code = \"pt-PT\"", "code = \"\"");
    assert!(matches!(
        Lexicon::from_toml_str(&empty_code),
        Err(LexiconError::Invalid(_))
    ));
}

#[test]
fn test_invalid_pattern_names_the_pattern() {
    let broken = MINIMAL.replace(r"'\bfixe\b'", "'[fixe'");
    let err = Lexicon::from_toml_str(&broken).unwrap_err();
    assert!(err.to_string().contains("[fixe"));
}
