//! Status command implementation

use anyhow::Result;
use clap::Args;
use corrige_core::{Analyzer, EngineStatus, ExternalAdapter};
use serde::Serialize;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the status command
#[derive(Debug, Args)]
pub struct StatusArgs {
    /// LanguageTool server to probe (default: from config)
    #[arg(long, value_name = "URL", env = "CORRIGE_LANGUAGETOOL_URL")]
    pub languagetool_url: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Health report printed by `corrige status`
#[derive(Debug, Serialize)]
struct StatusReport {
    online: bool,
    language_tool: bool,
    #[serde(flatten)]
    engine: EngineStatus,
}

impl StatusArgs {
    /// Execute the status command
    pub fn execute(&self) -> Result<()> {
        let report = self.report()?;

        if self.json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!("CorrigeAI {}", env!("CARGO_PKG_VERSION"));
            println!("  Lexicon: {}", report.engine.lexicon);
            match &report.engine.external_tool {
                Some(name) => println!("  External checker: {name} (online)"),
                None => println!("  External checker: unavailable (heuristic rules only)"),
            }
        }
        Ok(())
    }

    fn report(&self) -> Result<StatusReport> {
        let config = CliConfig::load(self.config.as_deref())?;
        let mut server = config.languagetool.server.clone();
        if let Some(url) = &self.languagetool_url {
            server.url = url.clone();
        }

        let adapter = ExternalAdapter::try_languagetool(&server, config.analysis.external.clone());
        let analyzer = Analyzer::builder()
            .config(config.analysis)
            .external(adapter)
            .build()?;
        let engine = analyzer.status();

        Ok(StatusReport {
            online: true,
            language_tool: engine.external_tool_available,
            engine,
        })
    }
}
