//! Grade computation
//!
//! The grade starts at 10, loses points per error, gains cumulative bonuses
//! for length, paragraphing and vocabulary, and is clamped to `[0.5, 10.0]`
//! with one decimal.

use serde::{Deserialize, Serialize};

use crate::finding::Finding;
use crate::readability::round1;

pub const MAX_GRADE: f64 = 10.0;
pub const MIN_GRADE: f64 = 0.5;

const GRAMMAR_PENALTY: f64 = 0.8;
const STYLE_PENALTY: f64 = 0.4;
const INFORMAL_PENALTY: f64 = 1.5;

/// (word count strictly above, bonus)
const LENGTH_BONUSES: &[(usize, f64)] = &[(100, 0.3), (200, 0.3), (300, 0.2)];
/// (paragraph count at least, bonus)
const PARAGRAPH_BONUSES: &[(usize, f64)] = &[(3, 0.3), (4, 0.2)];
const RICHNESS_THRESHOLD: f64 = 0.6;
const RICHNESS_BONUS: f64 = 0.2;

/// Message fragments that trigger the register penalty
const INFORMAL_MARKERS: &[&str] = &["informal", "internetês"];

/// Qualitative band of a grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradeClass {
    High,
    Medium,
    Low,
}

impl GradeClass {
    /// Band for a grade: 7 and above is high, 5 and above medium
    pub fn for_grade(grade: f64) -> Self {
        if grade >= 7.0 {
            Self::High
        } else if grade >= 5.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Label shown to the writer
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "Bom trabalho! Texto com boa qualidade.",
            Self::Medium => "Razoável. Corrija os erros apontados.",
            Self::Low => "Precisa de revisão. Analise cada erro com atenção.",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Everything the formula looks at
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreInputs<'a> {
    pub grammar_count: usize,
    pub style_count: usize,
    pub word_count: usize,
    pub paragraph_count: usize,
    pub vocabulary_richness: f64,
    pub findings: &'a [Finding],
}

/// Final grade and its band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub grade: f64,
    pub class: GradeClass,
}

impl Score {
    pub fn label(&self) -> &'static str {
        self.class.label()
    }
}

/// Unclamped, unrounded grade
pub fn raw_grade(inputs: &ScoreInputs<'_>) -> f64 {
    let mut grade = MAX_GRADE
        - GRAMMAR_PENALTY * inputs.grammar_count as f64
        - STYLE_PENALTY * inputs.style_count as f64;

    grade += LENGTH_BONUSES
        .iter()
        .filter(|(above, _)| inputs.word_count > *above)
        .map(|(_, bonus)| bonus)
        .sum::<f64>();

    grade += PARAGRAPH_BONUSES
        .iter()
        .filter(|(at_least, _)| inputs.paragraph_count >= *at_least)
        .map(|(_, bonus)| bonus)
        .sum::<f64>();

    if inputs.vocabulary_richness > RICHNESS_THRESHOLD {
        grade += RICHNESS_BONUS;
    }

    if has_informal_finding(inputs.findings) {
        grade -= INFORMAL_PENALTY;
    }

    grade
}

/// Clamp, round and classify
pub fn score(inputs: &ScoreInputs<'_>) -> Score {
    let grade = round1(raw_grade(inputs).clamp(MIN_GRADE, MAX_GRADE));
    Score {
        grade,
        class: GradeClass::for_grade(grade),
    }
}

fn has_informal_finding(findings: &[Finding]) -> bool {
    findings
        .iter()
        .any(|f| INFORMAL_MARKERS.iter().any(|marker| f.mentions(marker)))
}
