//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use corrige_core::AnalysisResult;
use serde::Serialize;
use std::io::Write;

/// Collects every result and writes one JSON array on `finish`
pub struct JsonFormatter<W: Write> {
    writer: W,
    entries: Vec<JsonEntry>,
    pretty: bool,
}

/// One analysed text
#[derive(Debug, Serialize)]
pub struct JsonEntry {
    /// File name, or `<stdin>`
    pub source: String,
    pub result: AnalysisResult,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter; pretty-printed by default
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            entries: Vec::new(),
            pretty: true,
        }
    }

    /// Toggle pretty printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_result(&mut self, source: &str, result: &AnalysisResult) -> Result<()> {
        self.entries.push(JsonEntry {
            source: source.to_string(),
            result: result.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.entries)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.entries)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
