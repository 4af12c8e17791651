//! Segmentation modes

use crate::delegate::ChunkerOptions;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Granularity selected at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentationMode {
    /// Sentence boundaries
    Sentences,
    /// Line terminators
    Lines,
    /// Blank-line-delimited blocks
    #[default]
    Paragraphs,
    /// Structural sections
    Sections,
    /// A named delegate chunker
    Delegate,
}

impl SegmentationMode {
    /// Rule-based modes, in the order they are listed in configuration
    pub const RULES: [SegmentationMode; 4] = [
        SegmentationMode::Sentences,
        SegmentationMode::Lines,
        SegmentationMode::Paragraphs,
        SegmentationMode::Sections,
    ];

    /// Configuration key for this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentationMode::Sentences => "sentences",
            SegmentationMode::Lines => "lines",
            SegmentationMode::Paragraphs => "paragraphs",
            SegmentationMode::Sections => "sections",
            SegmentationMode::Delegate => "chunker",
        }
    }

    /// Separator used to join chunks when no explicit one is configured
    pub fn default_separator(&self) -> &'static str {
        match self {
            SegmentationMode::Sentences | SegmentationMode::Delegate => " ",
            SegmentationMode::Lines => "\n",
            SegmentationMode::Paragraphs => "\n\n",
            SegmentationMode::Sections => "\n\n\n",
        }
    }

    /// Whether this mode uses the built-in rules
    pub fn is_rule_based(&self) -> bool {
        !matches!(self, SegmentationMode::Delegate)
    }
}

impl fmt::Display for SegmentationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SegmentationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sentences" | "sentence" => Ok(SegmentationMode::Sentences),
            "lines" | "line" => Ok(SegmentationMode::Lines),
            "paragraphs" | "paragraph" => Ok(SegmentationMode::Paragraphs),
            "sections" | "section" => Ok(SegmentationMode::Sections),
            "chunker" | "delegate" => Ok(SegmentationMode::Delegate),
            other => Err(format!("unknown segmentation mode: {other}")),
        }
    }
}

/// Name and passthrough configuration of a delegate chunker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelegateSpec {
    /// Registry name
    pub name: String,
    /// Options forwarded verbatim to the factory
    #[serde(default)]
    pub options: ChunkerOptions,
}

impl DelegateSpec {
    /// Create a delegate spec
    pub fn new(name: impl Into<String>, options: ChunkerOptions) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_paragraphs() {
        assert_eq!(SegmentationMode::default(), SegmentationMode::Paragraphs);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Sentences".parse(), Ok(SegmentationMode::Sentences));
        assert_eq!("line".parse(), Ok(SegmentationMode::Lines));
        assert_eq!("chunker".parse(), Ok(SegmentationMode::Delegate));
        assert!("words".parse::<SegmentationMode>().is_err());
    }

    #[test]
    fn test_default_separators() {
        assert_eq!(SegmentationMode::Sentences.default_separator(), " ");
        assert_eq!(SegmentationMode::Lines.default_separator(), "\n");
        assert_eq!(SegmentationMode::Paragraphs.default_separator(), "\n\n");
        assert_eq!(SegmentationMode::Sections.default_separator(), "\n\n\n");
        assert_eq!(SegmentationMode::Delegate.default_separator(), " ");
    }

    #[test]
    fn test_rule_based() {
        assert!(SegmentationMode::RULES.iter().all(|m| m.is_rule_based()));
        assert!(!SegmentationMode::Delegate.is_rule_based());
    }
}
