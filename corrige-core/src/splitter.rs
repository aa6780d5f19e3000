//! Lexical and structural segmentation
//!
//! Splits text into whitespace-delimited words (punctuation kept), sentences
//! (runs of `.`, `!`, `?`) and paragraphs (blank lines). All segments borrow
//! from the input.

use regex::Regex;
use std::sync::OnceLock;

static PARAGRAPH_BREAK: OnceLock<Regex> = OnceLock::new();

fn paragraph_break() -> &'static Regex {
    PARAGRAPH_BREAK.get_or_init(|| Regex::new(r"\n\s*\n").expect("valid paragraph regex"))
}

/// Words, sentences and paragraphs of a text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segments<'a> {
    /// Whitespace-delimited words, punctuation retained
    pub words: Vec<&'a str>,
    /// Trimmed, non-empty sentences
    pub sentences: Vec<&'a str>,
    /// Trimmed, non-empty paragraphs
    pub paragraphs: Vec<&'a str>,
}

impl<'a> Segments<'a> {
    /// Segment `text`. Never fails; empty input yields empty sequences.
    pub fn split(text: &'a str) -> Self {
        Self {
            words: split_words(text),
            sentences: split_sentences(text),
            paragraphs: split_paragraphs(text),
        }
    }

    /// Number of words
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

/// Whitespace-delimited words
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Sentences split on `.`, `!` and `?`
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Paragraphs separated by one or more blank lines
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    paragraph_break()
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}
