//! Validate command implementation

use anyhow::Result;
use clap::Args;
use corrige_core::Lexicon;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the lexicon file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub lexicon: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating lexicon: {}", self.lexicon.display());

        match Lexicon::from_file(&self.lexicon) {
            Ok(lexicon) => {
                println!("✓ Lexicon is valid!");
                println!("  Code: {}", lexicon.code());
                println!("  Name: {}", lexicon.name());
                println!("  Accent corrections: {}", lexicon.accent_count());
                println!("  Informal terms: {}", lexicon.informal().len());
                println!("  Clichés: {}", lexicon.cliches().len());
                println!("  Vague words: {}", lexicon.vague().len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Lexicon is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {e}"))
            }
        }
    }
}
