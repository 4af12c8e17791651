//! Segmenter configuration
//!
//! A [`SegmenterConfig`] is the complete construction-time option set. It
//! can be built in code with [`SegmenterConfig::builder`] or deserialized
//! from the `[segmentation]` table of a TOML document. Keys the segmenter
//! does not recognize are collected into [`SegmenterConfig::options`] and
//! forwarded to the delegate chunker, if one is named.

use crate::delegate::ChunkerOptions;
use crate::error::{Result, SegmentError};
use crate::mode::{DelegateSpec, SegmentationMode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Table name under which the configuration lives in a TOML document
pub const SEGMENTATION_KEY: &str = "segmentation";

/// Default language for sentence rules
pub const DEFAULT_LANGUAGE: &str = "en";

/// Construction-time configuration of a [`Segmenter`](crate::Segmenter)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Split into sentences
    pub sentences: bool,
    /// Split into lines
    pub lines: bool,
    /// Split into paragraphs
    pub paragraphs: bool,
    /// Split into sections
    pub sections: bool,
    /// Name of a delegate chunker
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunker: Option<String>,
    /// Join the chunks of each input into one string
    pub join: bool,
    /// Separator used by `join`, overriding the mode default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    /// Drop chunks shorter than this many characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minlength: Option<usize>,
    /// Collapse space runs inside chunks
    pub cleantext: bool,
    /// Language code for sentence rules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// TOML file with custom sentence rules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_config: Option<PathBuf>,
    /// End sentences at blank lines even without terminal punctuation
    pub blank_line_breaks: bool,
    /// Separator regex for sections
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_pattern: Option<String>,
    /// Heading regex for sections
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_heading: Option<String>,
    /// Remaining keys, forwarded to the delegate chunker
    #[serde(flatten)]
    pub options: ChunkerOptions,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            sentences: false,
            lines: false,
            paragraphs: false,
            sections: false,
            chunker: None,
            join: false,
            separator: None,
            minlength: None,
            cleantext: true,
            language: None,
            language_config: None,
            blank_line_breaks: false,
            section_pattern: None,
            section_heading: None,
            options: ChunkerOptions::new(),
        }
    }
}

impl SegmenterConfig {
    /// Start building a configuration
    pub fn builder() -> SegmenterConfigBuilder {
        SegmenterConfigBuilder::default()
    }

    /// Configuration selecting a single rule-based mode
    pub fn for_mode(mode: SegmentationMode) -> Self {
        let mut config = Self::default();
        config.set_mode(mode);
        config
    }

    /// Parse the `[segmentation]` table of a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut document: toml::Table = toml::from_str(content)?;
        let table = document.remove(SEGMENTATION_KEY).ok_or_else(|| {
            SegmentError::Configuration(format!("missing [{SEGMENTATION_KEY}] table"))
        })?;
        let config: Self = table.try_into()?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SegmentError::Configuration(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Render as a TOML document with a `[segmentation]` table
    pub fn to_toml_string(&self) -> Result<String> {
        let table =
            toml::Value::try_from(self).map_err(|e| SegmentError::Configuration(e.to_string()))?;
        let mut document = toml::Table::new();
        document.insert(SEGMENTATION_KEY.to_string(), table);
        toml::to_string(&document).map_err(|e| SegmentError::Configuration(e.to_string()))
    }

    /// Resolve the selected mode
    ///
    /// No mode flag selects paragraphs; more than one is an error.
    pub fn mode(&self) -> Result<SegmentationMode> {
        let flags = [
            (self.sentences, SegmentationMode::Sentences),
            (self.lines, SegmentationMode::Lines),
            (self.paragraphs, SegmentationMode::Paragraphs),
            (self.sections, SegmentationMode::Sections),
            (self.chunker.is_some(), SegmentationMode::Delegate),
        ];
        let selected: Vec<SegmentationMode> = flags
            .into_iter()
            .filter_map(|(set, mode)| set.then_some(mode))
            .collect();

        match selected.as_slice() {
            [] => Ok(SegmentationMode::default()),
            [mode] => Ok(*mode),
            many => Err(SegmentError::Configuration(format!(
                "conflicting modes requested: {}",
                many.iter().map(|m| m.as_str()).collect::<Vec<_>>().join(", ")
            ))),
        }
    }

    /// Select `mode`, clearing every other mode flag. Selecting
    /// [`SegmentationMode::Delegate`] leaves `chunker` untouched.
    pub fn set_mode(&mut self, mode: SegmentationMode) {
        self.sentences = mode == SegmentationMode::Sentences;
        self.lines = mode == SegmentationMode::Lines;
        self.paragraphs = mode == SegmentationMode::Paragraphs;
        self.sections = mode == SegmentationMode::Sections;
        if mode != SegmentationMode::Delegate {
            self.chunker = None;
        }
    }

    /// Delegate name and options, when a chunker is configured
    ///
    /// `language` is forwarded to the chunker unless the options already
    /// carry their own.
    pub fn delegate(&self) -> Option<DelegateSpec> {
        let name = self.chunker.as_ref()?;
        let mut options = self.options.clone();
        if let Some(language) = &self.language {
            if options.get("language").is_none() {
                options.insert("language", language.clone());
            }
        }
        Some(DelegateSpec::new(name.clone(), options))
    }

    /// Language code for sentence rules
    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    /// Check option consistency and return the selected mode
    pub fn validate(&self) -> Result<SegmentationMode> {
        let mode = self.mode()?;

        if matches!(self.chunker.as_deref(), Some(name) if name.trim().is_empty()) {
            return Err(SegmentError::Configuration(
                "chunker name must not be empty".to_string(),
            ));
        }

        if mode != SegmentationMode::Delegate && !self.options.is_empty() {
            let keys: Vec<&str> = self.options.keys().collect();
            return Err(SegmentError::Configuration(format!(
                "unrecognized option(s): {}",
                keys.join(", ")
            )));
        }

        if self.section_pattern.is_some() && self.section_heading.is_some() {
            return Err(SegmentError::Configuration(
                "section_pattern and section_heading are mutually exclusive".to_string(),
            ));
        }

        if self.language.is_some() && self.language_config.is_some() {
            return Err(SegmentError::Configuration(
                "language and language_config are mutually exclusive".to_string(),
            ));
        }

        if mode != SegmentationMode::Sections
            && (self.section_pattern.is_some() || self.section_heading.is_some())
        {
            log::warn!("Section patterns are ignored in {mode} mode");
        }

        let language_ignored = match mode {
            SegmentationMode::Sentences => false,
            SegmentationMode::Delegate => self.language_config.is_some(),
            _ => self.language.is_some() || self.language_config.is_some(),
        };
        if language_ignored {
            log::warn!("Language rules are ignored in {mode} mode");
        }

        if mode != SegmentationMode::Sentences && self.blank_line_breaks {
            log::warn!("Blank-line breaks are ignored in {mode} mode");
        }

        if !self.join && self.separator.is_some() {
            log::warn!("Separator is ignored without join");
        }

        Ok(mode)
    }
}

/// Builder for [`SegmenterConfig`]
#[derive(Debug, Default)]
pub struct SegmenterConfigBuilder {
    config: SegmenterConfig,
}

impl SegmenterConfigBuilder {
    /// Select a rule-based mode
    pub fn mode(mut self, mode: SegmentationMode) -> Self {
        self.config.set_mode(mode);
        self
    }

    /// Split into sentences
    pub fn sentences(self) -> Self {
        self.mode(SegmentationMode::Sentences)
    }

    /// Split into lines
    pub fn lines(self) -> Self {
        self.mode(SegmentationMode::Lines)
    }

    /// Split into paragraphs
    pub fn paragraphs(self) -> Self {
        self.mode(SegmentationMode::Paragraphs)
    }

    /// Split into sections
    pub fn sections(self) -> Self {
        self.mode(SegmentationMode::Sections)
    }

    /// Use a named delegate chunker
    pub fn chunker(mut self, name: impl Into<String>) -> Self {
        self.config.set_mode(SegmentationMode::Delegate);
        self.config.chunker = Some(name.into());
        self
    }

    /// Add a delegate option
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.config.options.insert(key, value);
        self
    }

    /// Join chunks into one string per input
    pub fn join(mut self, join: bool) -> Self {
        self.config.join = join;
        self
    }

    /// Override the join separator
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = Some(separator.into());
        self
    }

    /// Drop chunks shorter than `minlength` characters
    pub fn minlength(mut self, minlength: usize) -> Self {
        self.config.minlength = Some(minlength);
        self
    }

    /// Enable or disable space collapsing
    pub fn cleantext(mut self, cleantext: bool) -> Self {
        self.config.cleantext = cleantext;
        self
    }

    /// Set the sentence rules language
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.language = Some(language.into());
        self
    }

    /// Load sentence rules from a TOML file
    pub fn language_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.language_config = Some(path.into());
        self
    }

    /// End sentences at every blank line
    pub fn blank_line_breaks(mut self, enabled: bool) -> Self {
        self.config.blank_line_breaks = enabled;
        self
    }

    /// Split sections at matches of `pattern`
    pub fn section_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.section_pattern = Some(pattern.into());
        self
    }

    /// Start a section at every line matching `pattern`
    pub fn section_heading(mut self, pattern: impl Into<String>) -> Self {
        self.config.section_heading = Some(pattern.into());
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> Result<SegmenterConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
