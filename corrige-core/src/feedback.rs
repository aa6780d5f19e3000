//! Encouragement and advice
//!
//! Tips are emitted after the corrective findings and never count as errors.

use crate::finding::Finding;

/// Inputs the tips depend on
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FeedbackInputs {
    pub word_count: usize,
    pub paragraph_count: usize,
    pub vocabulary_richness: f64,
    pub grammar_count: usize,
    pub style_count: usize,
}

/// Tips in emission order: length band, paragraphs, vocabulary, closing
pub fn synthesize(inputs: &FeedbackInputs) -> Vec<Finding> {
    let mut tips = Vec::new();
    let wc = inputs.word_count;

    if wc < 30 {
        tips.push(Finding::tip(
            format!("Texto muito curto ({wc} palavras)"),
            "Uma redação deve ter no mínimo 7 linhas (~100 palavras). Desenvolva argumentos com exemplos e dados.",
        ));
    } else if wc < 100 {
        tips.push(Finding::tip(
            format!("Texto curto ({wc} palavras)"),
            "Tente expandir para 200+ palavras. Adicione argumentos, exemplos concretos e dados para fortalecer o texto.",
        ));
    } else if wc >= 200 {
        tips.push(Finding::tip(
            format!("Bom volume de texto ({wc} palavras)"),
            "O tamanho está adequado. Verifique se todos os argumentos estão bem desenvolvidos.",
        ));
    }

    if inputs.paragraph_count >= 4 {
        tips.push(Finding::tip(
            format!(
                "Boa estrutura de parágrafos ({} parágrafos)",
                inputs.paragraph_count
            ),
            "A divisão em parágrafos demonstra organização e facilita a leitura.",
        ));
    }

    if inputs.vocabulary_richness > 0.7 && wc > 50 {
        tips.push(Finding::tip(
            format!(
                "Vocabulário diversificado ({:.0}% de palavras únicas)",
                inputs.vocabulary_richness * 100.0
            ),
            "Bom uso de vocabulário variado, o que enriquece o texto.",
        ));
    }

    if inputs.grammar_count == 0 && inputs.style_count == 0 {
        tips.push(Finding::tip(
            "Nenhum erro significativo encontrado",
            "Texto muito bem escrito! Continue praticando para manter esse nível de qualidade.",
        ));
    } else {
        tips.push(Finding::tip(
            "Continue praticando!",
            "Cada erro corrigido é um aprendizado. Revise seus textos anteriores e observe sua evolução.",
        ));
    }

    tips
}
