//! Compiled language rules consulted by the sentence detector

use super::abbreviation::AbbreviationTrie;
use super::config::LanguageConfig;
use super::loader;
use crate::error::{CoreError, Result};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Role of a character with respect to enclosures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnclosureRole {
    /// Opens an asymmetric pair with the given id
    Open(u8),
    /// Closes an asymmetric pair with the given id
    Close(u8),
    /// Opens and closes a symmetric pair (straight quotes)
    Symmetric,
}

/// Language rules in lookup-friendly form.
///
/// Built once from a [`LanguageConfig`] and shared read-only by every
/// sentence splitter that uses it.
#[derive(Debug, Clone)]
pub struct LanguageRules {
    code: String,
    name: String,
    terminators: HashSet<char>,
    require_whitespace: bool,
    ellipsis_patterns: Vec<String>,
    ellipsis_chars: HashSet<char>,
    ellipsis_boundary: bool,
    enclosures: HashMap<char, EnclosureRole>,
    abbreviations: AbbreviationTrie,
    starters: HashSet<String>,
    attached: HashSet<String>,
}

impl LanguageRules {
    /// Compile rules from a configuration
    pub fn from_config(config: &LanguageConfig) -> Result<Self> {
        config.validate().map_err(CoreError::LanguageConfig)?;

        let mut enclosures = HashMap::new();
        let mut next_id = 0u8;
        for pair in &config.enclosures.pairs {
            if pair.symmetric || pair.open == pair.close {
                enclosures.insert(pair.open, EnclosureRole::Symmetric);
                enclosures.insert(pair.close, EnclosureRole::Symmetric);
            } else {
                enclosures.insert(pair.open, EnclosureRole::Open(next_id));
                enclosures.insert(pair.close, EnclosureRole::Close(next_id));
                next_id = next_id.saturating_add(1);
            }
        }

        let ellipsis_chars = config
            .ellipsis
            .patterns
            .iter()
            .flat_map(|p| p.chars())
            .filter(|c| !c.is_alphanumeric() && !c.is_whitespace())
            .collect();

        let starters = config
            .sentence_starters
            .categories
            .values()
            .flatten()
            .cloned()
            .collect();

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            terminators: config.terminators.chars.iter().copied().collect(),
            require_whitespace: config.terminators.require_whitespace,
            ellipsis_patterns: config.ellipsis.patterns.clone(),
            ellipsis_chars,
            ellipsis_boundary: config.ellipsis.treat_as_boundary,
            enclosures,
            abbreviations: AbbreviationTrie::from_categories(
                &config.abbreviations.categories,
                false,
            ),
            starters,
            attached: config.sentence_starters.attached.iter().cloned().collect(),
        })
    }

    /// Rules for an embedded language (`en`, `ja`, or their names)
    pub fn for_language(code: &str) -> Result<Self> {
        Self::from_config(loader::get_language_config(code)?)
    }

    /// Rules loaded from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_config(&loader::load_from_file(path)?)
    }

    /// Default English rules
    pub fn english() -> Result<Self> {
        Self::for_language("en")
    }

    /// Language code
    pub fn language_code(&self) -> &str {
        &self.code
    }

    /// Human-readable language name
    pub fn language_name(&self) -> &str {
        &self.name
    }

    /// Number of abbreviations known to these rules
    pub fn abbreviation_count(&self) -> usize {
        self.abbreviations.len()
    }

    /// Whether a terminator must be followed by whitespace
    pub fn requires_whitespace(&self) -> bool {
        self.require_whitespace
    }

    /// Whether `ch` can be part of a terminator run
    pub fn is_terminal(&self, ch: char) -> bool {
        self.terminators.contains(&ch) || self.ellipsis_chars.contains(&ch)
    }

    /// Whether a terminator run is an ellipsis
    pub fn is_ellipsis(&self, run: &str) -> bool {
        self.ellipsis_patterns.iter().any(|p| run.contains(p.as_str()))
    }

    /// Whether an ellipsis may end a sentence
    pub fn ellipsis_is_boundary(&self) -> bool {
        self.ellipsis_boundary
    }

    /// Enclosure role of `ch`, if it is part of a configured pair
    pub fn enclosure(&self, ch: char) -> Option<EnclosureRole> {
        self.enclosures.get(&ch).copied()
    }

    /// Whether `ch` closes a pair or is a symmetric quote
    pub fn is_closing(&self, ch: char) -> bool {
        matches!(
            self.enclosure(ch),
            Some(EnclosureRole::Close(_)) | Some(EnclosureRole::Symmetric)
        )
    }

    /// Whether `ch` opens a pair or is a symmetric quote
    pub fn is_opening(&self, ch: char) -> bool {
        matches!(
            self.enclosure(ch),
            Some(EnclosureRole::Open(_)) | Some(EnclosureRole::Symmetric)
        )
    }

    /// Category of the abbreviation `token`, if it is one
    pub fn abbreviation(&self, token: &str) -> Option<&str> {
        self.abbreviations.lookup(token)
    }

    /// Whether abbreviations of `category` always attach to the next word
    pub fn is_attached(&self, category: &str) -> bool {
        self.attached.contains(category)
    }

    /// Whether `word` commonly starts a sentence
    pub fn is_sentence_starter(&self, word: &str) -> bool {
        self.starters.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_rules() {
        let rules = LanguageRules::english().unwrap();

        assert_eq!(rules.language_code(), "en");
        assert!(rules.is_terminal('.'));
        assert!(rules.is_terminal('…'));
        assert!(!rules.is_terminal('a'));
        assert!(rules.requires_whitespace());

        assert_eq!(rules.abbreviation("Dr"), Some("titles"));
        assert_eq!(rules.abbreviation("e.g"), Some("latin"));
        assert_eq!(rules.abbreviation("Hello"), None);
        assert!(rules.is_attached("titles"));
        assert!(!rules.is_attached("business"));

        assert!(rules.is_sentence_starter("The"));
        assert!(!rules.is_sentence_starter("the"));
    }

    #[test]
    fn test_enclosure_roles() {
        let rules = LanguageRules::english().unwrap();

        let open = rules.enclosure('(');
        let close = rules.enclosure(')');
        match (open, close) {
            (Some(EnclosureRole::Open(a)), Some(EnclosureRole::Close(b))) => assert_eq!(a, b),
            other => panic!("unexpected roles: {other:?}"),
        }
        assert_eq!(rules.enclosure('"'), Some(EnclosureRole::Symmetric));
        assert!(rules.is_closing('"'));
        assert!(rules.is_opening('“'));
        assert!(!rules.is_closing('“'));
        assert_eq!(rules.enclosure('a'), None);
    }

    #[test]
    fn test_ellipsis() {
        let rules = LanguageRules::english().unwrap();
        assert!(rules.is_ellipsis("..."));
        assert!(rules.is_ellipsis("…"));
        assert!(!rules.is_ellipsis("."));
        assert!(!rules.is_ellipsis("?!"));
    }

    #[test]
    fn test_japanese_rules() {
        let rules = LanguageRules::for_language("ja").unwrap();
        assert_eq!(rules.language_name(), "Japanese");
        assert!(rules.is_terminal('。'));
        assert!(!rules.requires_whitespace());
        assert!(rules.is_closing('」'));
        assert_eq!(rules.abbreviation_count(), 0);
    }

    #[test]
    fn test_unknown_language() {
        assert!(matches!(
            LanguageRules::for_language("tlh"),
            Err(CoreError::UnsupportedLanguage(_))
        ));
    }
}
