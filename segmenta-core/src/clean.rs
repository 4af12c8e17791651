//! Chunk cleaning and length filtering

use crate::chunk::Chunk;

/// Post-processing applied to every chunk a splitter produces.
///
/// Cleaning collapses runs of spaces into a single space and trims the
/// result. Chunks shorter than `minlength` characters after cleaning are
/// dropped, as are chunks left empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cleaner {
    collapse: bool,
    minlength: Option<usize>,
}

impl Default for Cleaner {
    fn default() -> Self {
        Self {
            collapse: true,
            minlength: None,
        }
    }
}

impl Cleaner {
    /// Create a cleaner
    pub fn new(collapse: bool, minlength: Option<usize>) -> Self {
        Self {
            collapse,
            minlength,
        }
    }

    /// A cleaner that keeps chunk text untouched and filters nothing
    pub fn passthrough() -> Self {
        Self::new(false, None)
    }

    /// Whether whitespace normalization is enabled
    pub fn collapses(&self) -> bool {
        self.collapse
    }

    /// Minimum chunk length in characters, if any
    pub fn minlength(&self) -> Option<usize> {
        self.minlength
    }

    /// Clean a single chunk, returning `None` when it should be dropped
    pub fn clean(&self, mut chunk: Chunk) -> Option<Chunk> {
        if self.collapse {
            chunk.text = collapse_spaces(chunk.text.trim());
        }

        if chunk.text.trim().is_empty() {
            return None;
        }

        match self.minlength {
            Some(min) if chunk.char_len() < min => None,
            _ => Some(chunk),
        }
    }

    /// Clean a sequence of chunks, preserving order
    pub fn clean_all(&self, chunks: Vec<Chunk>) -> Vec<Chunk> {
        chunks.into_iter().filter_map(|c| self.clean(c)).collect()
    }
}

fn collapse_spaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_space = false;
    for ch in text.chars() {
        if ch == ' ' {
            if !previous_space {
                out.push(ch);
            }
            previous_space = true;
        } else {
            out.push(ch);
            previous_space = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_and_trim() {
        let cleaner = Cleaner::default();
        let chunk = cleaner.clean(Chunk::new("  a   b  c ", 0, 11)).unwrap();
        assert_eq!(chunk.text, "a b c");
        // Offsets refer to the source, not the cleaned text
        assert_eq!(chunk.span(), 0..11);
    }

    #[test]
    fn test_tabs_and_newlines_are_kept() {
        let cleaner = Cleaner::default();
        let chunk = cleaner.clean(Chunk::new("a\t\tb\nc", 0, 6)).unwrap();
        assert_eq!(chunk.text, "a\t\tb\nc");
    }

    #[test]
    fn test_minlength_filter() {
        let cleaner = Cleaner::new(true, Some(5));
        assert!(cleaner.clean(Chunk::new("abcd", 0, 4)).is_none());
        assert!(cleaner.clean(Chunk::new("abcde", 0, 5)).is_some());
    }

    #[test]
    fn test_minlength_counts_characters() {
        let cleaner = Cleaner::new(true, Some(3));
        assert!(cleaner.clean(Chunk::new("日本語", 0, 9)).is_some());
    }

    #[test]
    fn test_passthrough_keeps_spacing() {
        let cleaner = Cleaner::passthrough();
        let chunk = cleaner.clean(Chunk::new("a   b", 0, 5)).unwrap();
        assert_eq!(chunk.text, "a   b");
        assert!(cleaner.clean(Chunk::new("   ", 0, 3)).is_none());
    }

    #[test]
    fn test_clean_all_preserves_order() {
        let cleaner = Cleaner::new(true, Some(2));
        let chunks = vec![
            Chunk::new("first", 0, 5),
            Chunk::new("x", 6, 7),
            Chunk::new("second", 8, 14),
        ];
        let texts: Vec<_> = cleaner
            .clean_all(chunks)
            .into_iter()
            .map(Chunk::into_text)
            .collect();
        assert_eq!(texts, vec!["first", "second"]);
    }
}
