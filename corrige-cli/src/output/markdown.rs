//! Markdown output formatter

use super::{kind_label, OutputFormatter};
use anyhow::Result;
use corrige_core::{AnalysisResult, FindingSource};
use std::io::Write;

/// One section per text with a findings table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    result_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            result_count: 0,
        }
    }
}

/// Make `text` safe inside a table cell
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_result(&mut self, source: &str, result: &AnalysisResult) -> Result<()> {
        self.result_count += 1;
        let w = &mut self.writer;

        writeln!(w, "## {}", cell(source))?;
        writeln!(w)?;
        writeln!(
            w,
            "**Nota: {:.1} / 10** ({}) {}",
            result.grade,
            result.grade_class.as_str(),
            result.grade_label
        )?;
        writeln!(w)?;

        writeln!(w, "| # | Tipo | Origem | Descrição | Sugestão |")?;
        writeln!(w, "|---|------|--------|-----------|----------|")?;
        for (i, finding) in result.findings.iter().enumerate() {
            let origin = match finding.source {
                FindingSource::ExternalTool => "LanguageTool",
                FindingSource::Heuristic => "regras",
            };
            writeln!(
                w,
                "| {} | {} | {} | {} | {} |",
                i + 1,
                kind_label(finding.kind),
                origin,
                cell(&finding.message),
                cell(&finding.suggestion)
            )?;
        }
        writeln!(w)?;

        let s = &result.statistics;
        writeln!(w, "### Estatísticas")?;
        writeln!(w)?;
        writeln!(w, "- Palavras: {}", s.word_count)?;
        writeln!(w, "- Caracteres: {}", s.char_count)?;
        writeln!(w, "- Frases: {}", s.sentence_count)?;
        writeln!(w, "- Parágrafos: {}", s.paragraph_count)?;
        writeln!(w, "- Média de caracteres por palavra: {:.1}", s.avg_word_length)?;
        writeln!(w, "- Média de palavras por frase: {:.1}", s.avg_sentence_length)?;
        writeln!(w, "- Riqueza de vocabulário: {:.1}%", s.vocabulary_percentage())?;
        writeln!(w, "- Erros gramaticais: {}", s.grammar_errors)?;
        writeln!(w, "- Erros de estilo: {}", s.style_errors)?;
        writeln!(w)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Textos analisados: {}*", self.result_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corrige_core::Analyzer;

    #[test]
    fn test_sections_and_table() {
        let result = Analyzer::new().analyze("Hoje nao vou la pq tah chovendo mt.");
        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer);
            formatter.format_result("redacao.txt", &result).unwrap();
            formatter.finish().unwrap();
        }
        let out = String::from_utf8(buffer).unwrap();

        assert!(out.starts_with("## redacao.txt\n"));
        assert!(out.contains("**Nota: 7.1 / 10** (high)"));
        assert!(out.contains("| 1 | gramática | regras | Palavras sem acentuação"));
        assert!(out.contains("### Estatísticas"));
        assert!(out.ends_with("---\n*Textos analisados: 1*\n"));
    }

    #[test]
    fn test_cell_escapes_pipes() {
        assert_eq!(cell("a | b\nc"), "a \\| b c");
    }
}
