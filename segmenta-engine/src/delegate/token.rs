//! Word-token window delegate

use super::{Chunker, ChunkerError, ChunkerOptions};
use segmenta_core::Chunk;
use unicode_segmentation::UnicodeSegmentation;

/// Fixed windows of `chunk_size` word tokens, consecutive windows sharing
/// `chunk_overlap` tokens
#[derive(Debug, Clone)]
pub struct TokenChunker {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl TokenChunker {
    /// Registry name
    pub const NAME: &'static str = "token";

    const OPTIONS: &'static [&'static str] = &["chunk_size", "chunk_overlap"];

    /// Create a chunker; `chunk_overlap` must be smaller than `chunk_size`
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self, ChunkerError> {
        if chunk_size == 0 {
            return Err(ChunkerError::InvalidOption {
                key: "chunk_size".to_string(),
                expected: "a positive integer",
            });
        }
        if chunk_overlap >= chunk_size {
            return Err(ChunkerError::InvalidOption {
                key: "chunk_overlap".to_string(),
                expected: "smaller than chunk_size",
            });
        }
        Ok(Self {
            chunk_size,
            chunk_overlap,
        })
    }

    /// Create a chunker from passthrough options
    pub fn from_options(options: &ChunkerOptions) -> Result<Self, ChunkerError> {
        options.reject_unknown(Self::OPTIONS)?;
        Self::new(
            options.positive_or("chunk_size", 256)?,
            options.usize_or("chunk_overlap", 0)?,
        )
    }
}

impl Chunker for TokenChunker {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn chunk(&self, text: &str) -> Result<Vec<Chunk>, ChunkerError> {
        let tokens: Vec<(usize, usize)> = text
            .split_word_bound_indices()
            .filter(|(_, word)| !word.trim().is_empty())
            .map(|(offset, word)| (offset, offset + word.len()))
            .collect();

        let step = self.chunk_size - self.chunk_overlap;
        let mut chunks = Vec::new();
        let mut first = 0;
        while first < tokens.len() {
            let last = (first + self.chunk_size).min(tokens.len()) - 1;
            chunks.extend(Chunk::trimmed(text, tokens[first].0..tokens[last].1));
            if last + 1 == tokens.len() {
                break;
            }
            first += step;
        }

        Ok(chunks)
    }
}
