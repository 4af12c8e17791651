//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

const TEMPLATE: &str = r##"# segmenta configuration

[segmentation]
# Pick one mode: sentences, lines, paragraphs or sections.
# With none set, text is split into paragraphs.
sentences = true
# lines = true
# paragraphs = true
# sections = true

# Or hand segmentation to a delegate chunker (see `segmenta list chunkers`).
# Any other key in this table is passed to the chunker as an option.
# chunker = "recursive"
# chunk_size = 512
# separators = ["\n\n", "\n", ". ", " "]

# Join the chunks of each input into one string
join = false
# separator = " "

# Drop chunks shorter than this many characters
# minlength = 10

# Collapse runs of spaces inside chunks
cleantext = true

# Sentence rules: a built-in language code or a rules file (default "en")
# language = "en"
# language_config = "my-language.toml"
# End sentences at blank lines even without a final period
# blank_line_breaks = false

# Section rules (sections mode only, pick at most one)
# section_pattern = "^---$"
# section_heading = "^#{1,6}\\s"

[output]
# text, json or markdown
default_format = "text"
pretty_json = true

[performance]
# 0 = one worker per CPU
worker_threads = 0
"##;

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
        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        std::fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the [segmentation] table");
        println!("2. Validate your configuration:");
        println!("   segmenta validate -c {}", self.output.display());
        println!("3. Use it for processing:");
        println!("   segmenta process -i input.txt -c {}", self.output.display());

        Ok(())
    }

    /// Template content
    pub fn template() -> &'static str {
        TEMPLATE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use segmenta_engine::{SegmentationMode, Segmenter};
    use tempfile::TempDir;

    #[test]
    fn test_template_is_valid_config() {
        let config = CliConfig::from_toml_str(GenerateConfigArgs::template()).unwrap();
        assert_eq!(
            config.segmentation.mode().unwrap(),
            SegmentationMode::Sentences
        );
        assert!(Segmenter::new(config.segmentation).is_ok());
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("segmenta.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
        };

        assert!(args.execute().is_ok());
        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("[segmentation]"));
    }

    #[test]
    fn test_execute_unwritable_path() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("/nonexistent/dir/segmenta.toml"),
        };
        assert!(args.execute().is_err());
    }
}
