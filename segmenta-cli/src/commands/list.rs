//! List command implementation

use anyhow::Result;
use clap::Subcommand;
use segmenta_core::LanguageRules;
use std::io::{self, Write};

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List delegate chunkers
    Chunkers,

    /// List available output formats
    Formats,

    /// List available language rules
    Languages,
}

impl ListCommands {
    /// Print the listing to stdout
    pub fn execute(&self) -> Result<()> {
        let stdout = io::stdout();
        self.write_to(&mut stdout.lock())
    }

    /// Write the listing to `writer`
    pub fn write_to(&self, writer: &mut impl Write) -> Result<()> {
        match self {
            ListCommands::Chunkers => {
                writeln!(writer, "Available chunkers:")?;
                for name in segmenta_engine::available_chunkers() {
                    writeln!(writer, "  {name}")?;
                }
                if !cfg!(feature = "token") {
                    writeln!(writer, "  token (unavailable: built without the 'token' feature)")?;
                }
            }
            ListCommands::Formats => {
                writeln!(writer, "Available output formats:")?;
                writeln!(writer, "  text      one chunk per line")?;
                writeln!(writer, "  json      array of chunks with source and byte offsets")?;
                writeln!(writer, "  markdown  numbered list per input file")?;
            }
            ListCommands::Languages => {
                writeln!(writer, "Available languages:")?;
                for code in segmenta_engine::available_languages() {
                    let rules = LanguageRules::for_language(code)?;
                    writeln!(writer, "  {code}  {}", rules.language_name())?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(command: ListCommands) -> String {
        let mut out = Vec::new();
        command.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_chunkers() {
        let output = listing(ListCommands::Chunkers);
        assert!(output.contains("recursive"));
        assert!(output.contains("sentence"));
        assert!(output.contains("token"));
    }

    #[test]
    fn test_list_languages() {
        let output = listing(ListCommands::Languages);
        assert!(output.contains("en  English"));
        assert!(output.contains("ja  Japanese"));
    }

    #[test]
    fn test_list_formats() {
        let output = listing(ListCommands::Formats);
        for format in ["text", "json", "markdown"] {
            assert!(output.contains(format));
        }
    }
}
