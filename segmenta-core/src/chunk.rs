//! Chunk type shared by every splitter

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// One contiguous unit of segmented text.
///
/// `start..end` is the byte range of the source text the chunk was taken
/// from. `text` starts out as exactly that slice; cleaning may later
/// normalize whitespace inside it, so `text` and the slice can differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chunk {
    /// Chunk text
    pub text: String,
    /// Byte offset of the first byte in the source
    pub start: usize,
    /// Byte offset one past the last byte in the source
    pub end: usize,
}

impl Chunk {
    /// Create a chunk from explicit parts
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }

    /// Create a chunk holding `source[span]`
    pub fn from_span(source: &str, span: Range<usize>) -> Self {
        Self {
            text: source[span.clone()].to_string(),
            start: span.start,
            end: span.end,
        }
    }

    /// Create a chunk from `source[span]` with surrounding whitespace
    /// removed, or `None` when nothing but whitespace remains
    pub fn trimmed(source: &str, span: Range<usize>) -> Option<Self> {
        trimmed_span(source, span.start, span.end).map(|span| Self::from_span(source, span))
    }

    /// Byte range in the source text
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Length of the chunk text in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the chunk text is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consume the chunk and return its text
    pub fn into_text(self) -> String {
        self.text
    }
}

impl AsRef<str> for Chunk {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<Chunk> for String {
    fn from(chunk: Chunk) -> Self {
        chunk.text
    }
}

/// Shrink `start..end` so it excludes surrounding whitespace.
///
/// Returns `None` when nothing but whitespace is left.
pub(crate) fn trimmed_span(text: &str, start: usize, end: usize) -> Option<Range<usize>> {
    let slice = &text[start..end];
    let leading = slice.len() - slice.trim_start().len();
    let trimmed = slice.trim();
    if trimmed.is_empty() {
        return None;
    }
    let begin = start + leading;
    Some(begin..begin + trimmed.len())
}
