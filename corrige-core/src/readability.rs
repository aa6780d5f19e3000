//! Readability metrics

use std::collections::HashSet;

use crate::splitter::Segments;

/// Averages and lexical diversity of a text
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Readability {
    /// Mean characters per word, punctuation included
    pub avg_word_length: f64,
    /// Mean words per sentence
    pub avg_sentence_length: f64,
    /// Distinct case-folded words over total words, in [0, 1]
    pub vocabulary_richness: f64,
}

impl Readability {
    /// Compute metrics; every ratio is floored at a denominator of 1
    pub fn measure(segments: &Segments<'_>) -> Self {
        let word_count = segments.words.len();
        let words = word_count.max(1) as f64;
        let sentences = segments.sentences.len().max(1) as f64;

        let total_chars: usize = segments.words.iter().map(|w| w.chars().count()).sum();
        let distinct: HashSet<String> = segments.words.iter().map(|w| w.to_lowercase()).collect();

        Self {
            avg_word_length: total_chars as f64 / words,
            avg_sentence_length: word_count as f64 / sentences,
            vocabulary_richness: distinct.len() as f64 / words,
        }
    }
}

/// Round to one decimal place, ties to even
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
