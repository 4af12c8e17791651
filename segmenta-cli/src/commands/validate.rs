//! Validate command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use segmenta_engine::Segmenter;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Configuration file with a [segmentation] table
    #[arg(short, long, value_name = "CONFIG", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let result = CliConfig::load(&self.config).and_then(|config| {
            Segmenter::new(config.segmentation).context("Failed to build segmenter")
        });

        match result {
            Ok(segmenter) => {
                println!("✓ Configuration is valid!");
                println!("  Mode: {}", segmenter.mode());
                if let Some(spec) = segmenter.config().delegate() {
                    println!("  Chunker: {}", spec.name);
                    for (key, value) in spec.options.iter() {
                        println!("    {key} = {value}");
                    }
                }
                println!("  Join: {}", segmenter.config().join);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(e.context("Validation failed"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn test_validate_valid_config() {
        let file = config_file("[segmentation]\nchunker = \"sentence\"\nchunk_size = 100\n");
        let args = ValidateArgs {
            config: file.path().to_path_buf(),
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_unknown_chunker() {
        let file = config_file("[segmentation]\nchunker = \"nope\"\n");
        let args = ValidateArgs {
            config: file.path().to_path_buf(),
        };
        assert!(args.execute().is_err());
    }

    #[test]
    fn test_validate_conflicting_modes() {
        let file = config_file("[segmentation]\nsentences = true\nlines = true\n");
        let args = ValidateArgs {
            config: file.path().to_path_buf(),
        };
        assert!(args.execute().is_err());
    }
}
