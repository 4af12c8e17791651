//! Validate-language command implementation

use anyhow::Result;
use clap::Args;
use segmenta_core::LanguageRules;
use std::path::PathBuf;

/// Arguments for the validate-language command
#[derive(Debug, Args)]
pub struct ValidateLanguageArgs {
    /// Path to language configuration file to validate
    #[arg(short = 'c', long = "config", value_name = "FILE", required = true)]
    pub language_config: PathBuf,
}

impl ValidateLanguageArgs {
    /// Execute the validate-language command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating language configuration: {}",
            self.language_config.display()
        );

        match LanguageRules::from_file(&self.language_config) {
            Ok(rules) => {
                println!("✓ Configuration is valid!");
                println!("  Language code: {}", rules.language_code());
                println!("  Language name: {}", rules.language_name());
                println!("  Abbreviations: {}", rules.abbreviation_count());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {e}"))
            }
        }
    }
}
