//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating lexicon template...");
        println!("  Output file: {}", self.output.display());

        std::fs::write(&self.output, corrige_core::lexicon::embedded_source())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Lexicon template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the word lists and patterns");
        println!("2. Validate your lexicon:");
        println!("   corrige validate --lexicon {}", self.output.display());
        println!("3. Use it for analysis:");
        println!(
            "   corrige analyze -i <FILE> --lexicon {}",
            self.output.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corrige_core::Lexicon;
    use tempfile::TempDir;

    #[test]
    fn test_generated_template_loads() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("lexicon.toml");

        GenerateConfigArgs {
            output: output.clone(),
        }
        .execute()
        .unwrap();

        let lexicon = Lexicon::from_file(&output).unwrap();
        assert_eq!(lexicon.code(), "pt-BR");
    }

    #[test]
    fn test_unwritable_path() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("/nonexistent/dir/lexicon.toml"),
        };
        assert!(args.execute().is_err());
    }
}
