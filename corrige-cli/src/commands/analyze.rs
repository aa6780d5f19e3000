//! Analyze command implementation

use anyhow::{Context, Result};
use clap::Args;
use corrige_core::{AnalysisResult, Analyzer};
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use super::{build_analyzer, init_logging};
use crate::config::CliConfig;
use crate::input::{prepare_text, InputSource};
use crate::output::{create_formatter, OutputFormat};
use crate::progress::ProgressReporter;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input files or patterns (supports glob); `-` reads standard input
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Lexicon file replacing the built-in pt-BR word lists
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// LanguageTool server to consult
    #[arg(long, value_name = "URL", env = "CORRIGE_LANGUAGETOOL_URL")]
    pub languagetool_url: Option<String>,

    /// Never consult an external grammar checker
    #[arg(long)]
    pub no_external: bool,

    /// Analyze several files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for --parallel (default: number of CPUs)
    #[arg(short = 't', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting text analysis");
        log::debug!("Arguments: {self:?}");

        let config = CliConfig::load(self.config.as_deref())?;
        let format = match self.format {
            Some(format) => format,
            None => config.output.default_format.parse()?,
        };

        let analyzer = build_analyzer(
            &config,
            self.lexicon.as_deref(),
            self.languagetool_url.as_deref(),
            self.no_external,
        )?;

        let sources = InputSource::resolve(&self.input)?;
        log::info!("Analyzing {} text(s)", sources.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(sources.len() as u64);

        let results = if self.parallel && sources.len() > 1 {
            let threads = self.threads.unwrap_or_else(num_cpus::get).max(1);
            log::debug!("Using {threads} worker threads");
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to create thread pool")?;
            pool.install(|| {
                sources
                    .par_iter()
                    .map(|source| analyze_source(&analyzer, source, config.input.max_chars, &progress))
                    .collect::<Result<Vec<_>>>()
            })
        } else {
            sources
                .iter()
                .map(|source| analyze_source(&analyzer, source, config.input.max_chars, &progress))
                .collect::<Result<Vec<_>>>()
        };
        progress.finish();
        let results = results?;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(std::io::stdout()),
        };

        let mut formatter = create_formatter(format, writer, config.output.pretty_json);
        for (label, result) in &results {
            formatter.format_result(label, result)?;
        }
        formatter.finish()?;

        log::info!("Analysis complete");
        Ok(())
    }
}

/// Read, check and analyze one input
fn analyze_source(
    analyzer: &Analyzer,
    source: &InputSource,
    max_chars: usize,
    progress: &ProgressReporter,
) -> Result<(String, AnalysisResult)> {
    let label = source.label();
    let raw = source.read()?;
    let text = prepare_text(&raw, &label, max_chars)?;
    let result = analyzer.analyze(&text);
    log::debug!(
        "{label}: grade {:.1}, {} finding(s)",
        result.grade,
        result.findings.len()
    );
    progress.file_completed(&label);
    Ok((label, result))
}
