//! `corrige` command-line entry point

use anyhow::Result;
use clap::Parser;
use corrige_cli::commands::Commands;

/// Rule-based grammar, style and readability feedback for Portuguese prose
#[derive(Debug, Parser)]
#[command(name = "corrige", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from(["corrige", "analyze", "-i", "a.txt", "-f", "json"]).unwrap();
        assert!(matches!(cli.command, Commands::Analyze(_)));
    }
}
