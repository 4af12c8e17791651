//! Abbreviation trie used by the sentence detector

use std::collections::HashMap;

/// Trie node for abbreviation lookup
#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Child nodes indexed by character
    children: HashMap<char, TrieNode>,
    /// Category of the abbreviation ending at this node, if any
    category: Option<String>,
}

/// Case-insensitive abbreviation lookup keyed by the word before a period.
///
/// Abbreviations are stored without their final period, so "e.g." is
/// inserted as `e.g` and found when the detector sees the token `e.g`
/// followed by a dot.
#[derive(Debug, Clone)]
pub struct AbbreviationTrie {
    root: TrieNode,
    case_sensitive: bool,
    len: usize,
}

impl Default for AbbreviationTrie {
    fn default() -> Self {
        Self::new(false)
    }
}

impl AbbreviationTrie {
    /// Create an empty trie
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            root: TrieNode::default(),
            case_sensitive,
            len: 0,
        }
    }

    /// Build from configuration categories
    pub fn from_categories(categories: &HashMap<String, Vec<String>>, case_sensitive: bool) -> Self {
        let mut trie = Self::new(case_sensitive);

        for (category, abbreviations) in categories {
            for abbr in abbreviations {
                trie.insert(abbr, category);
            }
        }

        trie
    }

    /// Number of abbreviations stored
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the trie is empty (contains no abbreviations)
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert an abbreviation. A trailing period is ignored.
    pub fn insert(&mut self, abbreviation: &str, category: &str) {
        let abbreviation = abbreviation.trim().trim_end_matches('.');
        if abbreviation.is_empty() {
            return;
        }

        let case_sensitive = self.case_sensitive;
        let mut current = &mut self.root;
        for ch in abbreviation.chars() {
            current = current
                .children
                .entry(normalize(ch, case_sensitive))
                .or_default();
        }

        if current.category.is_none() {
            self.len += 1;
        }
        current.category = Some(category.to_string());
    }

    /// Look up a complete token, returning its category
    pub fn lookup(&self, token: &str) -> Option<&str> {
        let mut current = &self.root;
        for ch in token.chars() {
            current = current.children.get(&normalize(ch, self.case_sensitive))?;
        }
        current.category.as_deref()
    }

    /// Whether `token` is a known abbreviation
    pub fn contains(&self, token: &str) -> bool {
        self.lookup(token).is_some()
    }
}

fn normalize(ch: char, case_sensitive: bool) -> char {
    if case_sensitive {
        ch
    } else {
        ch.to_lowercase().next().unwrap_or(ch)
    }
}
