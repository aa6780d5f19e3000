//! CLI command implementations

use anyhow::{Context, Result};
use clap::Subcommand;
use corrige_core::{Analyzer, ExternalAdapter, Lexicon};
use std::path::Path;

use crate::config::CliConfig;
use crate::output::OutputFormat;

pub mod analyze;
pub mod generate_config;
pub mod status;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze texts and report grammar, style and readability
    Analyze(analyze::AnalyzeArgs),

    /// Report whether the external grammar checker is reachable
    Status(status::StatusArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a lexicon file
    Validate(validate::ValidateArgs),

    /// Write the built-in lexicon as a starting template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the analysis rules in emission order
    Rules,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::Status(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Rules => {
                println!("Analysis rules (in emission order):");
                for rule in corrige_core::rules::default_rules() {
                    println!("  {:<22} {}", rule.id(), rule.description());
                }
            }
            ListCommands::Formats => {
                println!("Output formats:");
                for (format, description) in OutputFormat::ALL {
                    println!("  {:<10} {}", format.name(), description);
                }
            }
        }
        Ok(())
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // A second initialisation in the same process is harmless
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

/// Assemble an analyzer from the config file and command-line overrides
pub(crate) fn build_analyzer(
    config: &CliConfig,
    lexicon: Option<&Path>,
    languagetool_url: Option<&str>,
    no_external: bool,
) -> Result<Analyzer> {
    let mut builder = Analyzer::builder().config(config.analysis.clone());

    if let Some(path) = lexicon {
        let lexicon = Lexicon::from_file(path)
            .with_context(|| format!("Failed to load lexicon: {}", path.display()))?;
        log::info!("Using lexicon {} from {}", lexicon.code(), path.display());
        builder = builder.lexicon(lexicon);
    }

    let wants_external = languagetool_url.is_some() || config.languagetool.enabled;
    if wants_external && !no_external {
        let mut server = config.languagetool.server.clone();
        if let Some(url) = languagetool_url {
            server.url = url.to_string();
        }
        builder = builder.external(ExternalAdapter::try_languagetool(
            &server,
            config.analysis.external.clone(),
        ));
    }

    Ok(builder.build()?)
}
