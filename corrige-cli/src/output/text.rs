//! Plain text output formatter

use super::{kind_label, OutputFormatter};
use anyhow::Result;
use corrige_core::{AnalysisResult, FindingKind};
use std::io::{self, Write};

/// Human-readable report, one block per text
pub struct TextFormatter<W: Write> {
    writer: W,
    results: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer, results: 0 }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_result(&mut self, source: &str, result: &AnalysisResult) -> Result<()> {
        if self.results > 0 {
            writeln!(self.writer)?;
        }
        self.results += 1;

        let w = &mut self.writer;
        writeln!(w, "=== {source} ===")?;
        writeln!(
            w,
            "Nota: {:.1}/10 [{}] {}",
            result.grade,
            result.grade_class.as_str(),
            result.grade_label
        )?;

        let problems: Vec<_> = result
            .findings
            .iter()
            .filter(|f| f.kind != FindingKind::Tip)
            .collect();
        writeln!(w)?;
        if problems.is_empty() {
            writeln!(w, "Problemas: nenhum")?;
        } else {
            writeln!(w, "Problemas ({}):", problems.len())?;
            for (i, finding) in problems.iter().enumerate() {
                writeln!(w, "  {}. [{}] {}", i + 1, kind_label(finding.kind), finding.message)?;
                writeln!(w, "     → {}", finding.suggestion)?;
            }
        }

        writeln!(w)?;
        writeln!(w, "Dicas:")?;
        for tip in result.findings_of(FindingKind::Tip) {
            writeln!(w, "  • {}", tip.message)?;
            writeln!(w, "    {}", tip.suggestion)?;
        }

        let s = &result.statistics;
        writeln!(w)?;
        writeln!(w, "Estatísticas:")?;
        writeln!(
            w,
            "  Palavras: {} | Caracteres: {} | Frases: {} | Parágrafos: {}",
            s.word_count, s.char_count, s.sentence_count, s.paragraph_count
        )?;
        writeln!(
            w,
            "  Média de caracteres por palavra: {:.1} | Média de palavras por frase: {:.1}",
            s.avg_word_length, s.avg_sentence_length
        )?;
        writeln!(
            w,
            "  Riqueza de vocabulário: {:.1}%",
            s.vocabulary_percentage()
        )?;
        writeln!(
            w,
            "  Erros gramaticais: {} | Erros de estilo: {} | LanguageTool: {}",
            s.grammar_errors,
            s.style_errors,
            if s.external_tool_available { "sim" } else { "não" }
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
