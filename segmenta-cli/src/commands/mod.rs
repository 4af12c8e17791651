//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod list;
pub mod process;
pub mod validate;
pub mod validate_language;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Segment text files
    Process(process::ProcessArgs),

    /// Check a configuration file by building a segmenter from it
    Validate(validate::ValidateArgs),

    /// Check a language rules file
    ValidateLanguage(validate_language::ValidateLanguageArgs),

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: list::ListCommands,
    },
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::ValidateLanguage(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}
