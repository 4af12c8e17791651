//! Recursive separator-based delegate

use super::{Chunker, ChunkerError, ChunkerOptions};
use segmenta_core::Chunk;
use std::ops::Range;

const DEFAULT_SEPARATORS: [&str; 4] = ["\n\n", "\n", ". ", " "];

/// Splits on the coarsest separator present, merges neighbouring pieces up
/// to `chunk_size` characters, and recurses into pieces that are still too
/// long with the next separator. Text with no separator left is cut at
/// character boundaries.
#[derive(Debug, Clone)]
pub struct RecursiveChunker {
    chunk_size: usize,
    separators: Vec<String>,
}

impl RecursiveChunker {
    /// Registry name
    pub const NAME: &'static str = "recursive";

    const OPTIONS: &'static [&'static str] = &["chunk_size", "separators"];

    /// Create a chunker with the default separators
    pub fn new(chunk_size: usize) -> Self {
        Self::with_separators(chunk_size, DEFAULT_SEPARATORS.map(String::from).to_vec())
    }

    /// Create a chunker with explicit separators, coarsest first
    pub fn with_separators(chunk_size: usize, separators: Vec<String>) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
            separators: separators.into_iter().filter(|s| !s.is_empty()).collect(),
        }
    }

    /// Create a chunker from passthrough options
    pub fn from_options(options: &ChunkerOptions) -> Result<Self, ChunkerError> {
        options.reject_unknown(Self::OPTIONS)?;
        let chunk_size = options.positive_or("chunk_size", 512)?;
        Ok(match options.strings("separators")? {
            Some(separators) => Self::with_separators(chunk_size, separators),
            None => Self::new(chunk_size),
        })
    }

    fn split_span(
        &self,
        text: &str,
        span: Range<usize>,
        separators: &[String],
        out: &mut Vec<Range<usize>>,
    ) {
        let piece = &text[span.clone()];
        if piece.chars().count() <= self.chunk_size {
            out.push(span);
            return;
        }

        let Some(index) = separators.iter().position(|s| piece.contains(s.as_str())) else {
            self.hard_split(text, span, out);
            return;
        };
        let separator = separators[index].as_str();
        let finer = &separators[index + 1..];

        // Separators stay attached to the piece they end
        let mut parts = Vec::new();
        let mut last = span.start;
        for (offset, _) in piece.match_indices(separator) {
            let cut = span.start + offset + separator.len();
            if cut > last {
                parts.push(last..cut);
                last = cut;
            }
        }
        if last < span.end {
            parts.push(last..span.end);
        }

        let mut current: Option<Range<usize>> = None;
        for part in parts {
            current = match current.take() {
                None => Some(part),
                Some(merged) if text[merged.start..part.end].chars().count() <= self.chunk_size => {
                    Some(merged.start..part.end)
                }
                Some(merged) => {
                    self.split_span(text, merged, finer, out);
                    Some(part)
                }
            };
        }
        if let Some(merged) = current {
            self.split_span(text, merged, finer, out);
        }
    }

    fn hard_split(&self, text: &str, span: Range<usize>, out: &mut Vec<Range<usize>>) {
        let mut start = span.start;
        for (count, (offset, _)) in text[span.clone()].char_indices().enumerate() {
            if count > 0 && count % self.chunk_size == 0 {
                out.push(start..span.start + offset);
                start = span.start + offset;
            }
        }
        if start < span.end {
            out.push(start..span.end);
        }
    }
}

impl Chunker for RecursiveChunker {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn chunk(&self, text: &str) -> Result<Vec<Chunk>, ChunkerError> {
        let mut spans = Vec::new();
        self.split_span(text, 0..text.len(), &self.separators, &mut spans);
        Ok(spans
            .into_iter()
            .filter_map(|span| Chunk::trimmed(text, span))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn texts(chunker: &RecursiveChunker, text: &str) -> Vec<String> {
        chunker
            .chunk(text)
            .unwrap()
            .into_iter()
            .map(Chunk::into_text)
            .collect()
    }

    #[test]
    fn test_short_text_is_one_chunk() {
        let chunker = RecursiveChunker::new(512);
        assert_eq!(texts(&chunker, "  short text  "), vec!["short text"]);
    }

    #[test]
    fn test_prefers_paragraph_breaks() {
        let chunker = RecursiveChunker::new(30);
        assert_eq!(
            texts(&chunker, "Short para one.\n\nShort para two.\n\nThird."),
            vec!["Short para one.", "Short para two.\n\nThird."]
        );
    }

    #[test]
    fn test_falls_back_to_spaces() {
        let chunker = RecursiveChunker::new(10);
        assert_eq!(
            texts(&chunker, "aaaa bbbb cccc dddd"),
            vec!["aaaa bbbb", "cccc dddd"]
        );
    }

    #[test]
    fn test_hard_split_without_separators() {
        let options = ChunkerOptions::new()
            .with("chunk_size", 4)
            .with("separators", json!([]));
        let chunker = RecursiveChunker::from_options(&options).unwrap();
        assert_eq!(texts(&chunker, "abcdefghij"), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_hard_split_is_char_safe() {
        let chunker = RecursiveChunker::with_separators(2, vec![]);
        assert_eq!(texts(&chunker, "日本語です"), vec!["日本", "語で", "す"]);
    }

    #[test]
    fn test_custom_separators() {
        let options = ChunkerOptions::new()
            .with("chunk_size", 2)
            .with("separators", json!(["|"]));
        let chunker = RecursiveChunker::from_options(&options).unwrap();
        assert_eq!(texts(&chunker, "a|b|c"), vec!["a|", "b|", "c"]);
    }

    #[test]
    fn test_invalid_separators() {
        let options = ChunkerOptions::new().with("separators", "\n");
        assert!(matches!(
            RecursiveChunker::from_options(&options),
            Err(ChunkerError::InvalidOption { key, .. }) if key == "separators"
        ));
    }

    #[test]
    fn test_offsets_match_source() {
        let text = "One two three four five six seven eight nine ten.";
        let chunker = RecursiveChunker::new(12);
        let chunks = chunker.chunk(text).unwrap();
        assert!(chunks.len() > 1);
        for chunk in chunks {
            assert!(chunk.char_len() <= 12);
            assert_eq!(&text[chunk.span()], chunk.text);
        }
    }
}
