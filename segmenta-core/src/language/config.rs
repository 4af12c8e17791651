//! Configuration structures and validation
//!
//! This module defines the TOML schema for language configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root language configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub metadata: Metadata,
    pub terminators: Terminators,
    #[serde(default)]
    pub ellipsis: Ellipsis,
    #[serde(default)]
    pub enclosures: Enclosures,
    #[serde(default)]
    pub abbreviations: Abbreviations,
    #[serde(default)]
    pub sentence_starters: SentenceStarters,
}

/// Language identification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Sentence terminator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Terminators {
    pub chars: Vec<char>,
    /// Whether a terminator must be followed by whitespace to end a sentence
    #[serde(default = "default_true")]
    pub require_whitespace: bool,
}

/// Ellipsis handling
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ellipsis {
    #[serde(default)]
    pub treat_as_boundary: bool,
    #[serde(default)]
    pub patterns: Vec<String>,
}

/// Enclosure pairs (quotes, brackets)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Enclosures {
    #[serde(default)]
    pub pairs: Vec<EnclosurePair>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnclosurePair {
    pub open: char,
    pub close: char,
    /// Symmetric pairs share one character for open and close and are not
    /// depth-tracked
    #[serde(default)]
    pub symmetric: bool,
}

/// Abbreviations grouped by arbitrary category names
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Abbreviations {
    #[serde(flatten)]
    pub categories: HashMap<String, Vec<String>>,
}

/// Words that signal a new sentence after an abbreviation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentenceStarters {
    /// Abbreviation categories that never end a sentence
    #[serde(default)]
    pub attached: Vec<String>,
    /// Categories of sentence starters
    #[serde(flatten)]
    pub categories: HashMap<String, Vec<String>>,
}

fn default_true() -> bool {
    true
}

impl LanguageConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        let config: LanguageConfig = toml::from_str(content)?;
        config
            .validate()
            .map_err(crate::CoreError::LanguageConfig)?;
        Ok(config)
    }

    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("Language code must not be empty".to_string());
        }

        // Check enclosure pairs limit
        if self.enclosures.pairs.len() > 255 {
            return Err("Too many enclosure pairs (max 255)".to_string());
        }

        // Check terminator chars not empty
        if self.terminators.chars.is_empty() {
            return Err("No terminator characters defined".to_string());
        }

        if self.ellipsis.patterns.iter().any(|p| p.is_empty()) {
            return Err("Ellipsis patterns must not be empty strings".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [metadata]
        code = "xx"
        name = "Test"

        [terminators]
        chars = ["."]
    "#;

    #[test]
    fn test_language_config_deserialize() {
        let toml_str = r#"
            [metadata]
            code = "en"
            name = "English"

            [terminators]
            chars = [".", "!", "?"]

            [ellipsis]
            treat_as_boundary = true
            patterns = ["...", "…"]

            [enclosures]
            pairs = [
                { open = "(", close = ")" },
                { open = '"', close = '"', symmetric = true }
            ]

            [abbreviations]
            titles = ["Dr", "Mr", "Mrs"]
            common = ["etc", "vs"]

            [sentence_starters]
            attached = ["titles"]
            articles = ["The", "A"]
        "#;

        let config = LanguageConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.metadata.code, "en");
        assert_eq!(config.terminators.chars.len(), 3);
        assert!(config.terminators.require_whitespace);
        assert_eq!(config.enclosures.pairs.len(), 2);
        assert_eq!(config.abbreviations.categories["titles"].len(), 3);
        assert_eq!(config.sentence_starters.attached, vec!["titles"]);
        assert!(!config.sentence_starters.categories.contains_key("attached"));
        assert_eq!(config.sentence_starters.categories["articles"].len(), 2);
    }

    #[test]
    fn test_optional_sections_default() {
        let config = LanguageConfig::from_toml_str(MINIMAL).unwrap();
        assert!(config.abbreviations.categories.is_empty());
        assert!(config.enclosures.pairs.is_empty());
        assert!(config.ellipsis.patterns.is_empty());
    }

    #[test]
    fn test_empty_code_rejected() {
        let toml_str = MINIMAL.replace("code = \"xx\"", "code = \"\"");
        assert!(LanguageConfig::from_toml_str(&toml_str).is_err());
    }

    #[test]
    fn test_missing_terminators_rejected() {
        let toml_str = MINIMAL.replace("chars = [\".\"]", "chars = []");
        assert!(LanguageConfig::from_toml_str(&toml_str).is_err());
    }
}
