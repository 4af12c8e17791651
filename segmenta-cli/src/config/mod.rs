//! Configuration file handling
//!
//! A CLI configuration file is a TOML document whose `[segmentation]`
//! table is the segmenter configuration. `[output]` and `[performance]`
//! hold CLI-only settings.

use crate::error::CliError;
use anyhow::{Context, Result};
use segmenta_engine::SegmenterConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Segmenter configuration
    #[serde(default)]
    pub segmentation: SegmenterConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = one per CPU)
    pub worker_threads: usize,
}

impl PerformanceConfig {
    /// Worker thread count with `0` resolved to the CPU count
    pub fn threads(&self) -> usize {
        match self.worker_threads {
            0 => num_cpus::get(),
            n => n,
        }
    }
}

impl CliConfig {
    /// Parse a configuration document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config
            .segmentation
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load `path` if given, otherwise the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
