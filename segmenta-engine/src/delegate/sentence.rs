//! Sentence-packing delegate

use super::{Chunker, ChunkerError, ChunkerOptions};
use segmenta_core::{Chunk, SentenceSplitter, Splitter};

/// Packs consecutive sentences into chunks of at most `chunk_size`
/// characters, with at least `min_sentences` sentences per chunk.
///
/// A chunk may exceed `chunk_size` only when it holds no more than
/// `min_sentences` sentences.
#[derive(Debug)]
pub struct SentenceChunker {
    splitter: SentenceSplitter,
    chunk_size: usize,
    min_sentences: usize,
}

impl SentenceChunker {
    /// Registry name
    pub const NAME: &'static str = "sentence";

    const OPTIONS: &'static [&'static str] = &["chunk_size", "min_sentences", "language"];

    /// Create a chunker for the given language
    pub fn new(language: &str, chunk_size: usize, min_sentences: usize) -> Result<Self, ChunkerError> {
        let splitter = SentenceSplitter::for_language(language)
            .map_err(|e| ChunkerError::Backend(e.to_string()))?;
        Ok(Self {
            splitter,
            chunk_size,
            min_sentences,
        })
    }

    /// Create a chunker from passthrough options
    pub fn from_options(options: &ChunkerOptions) -> Result<Self, ChunkerError> {
        options.reject_unknown(Self::OPTIONS)?;
        Self::new(
            options.str_or("language", "en")?,
            options.positive_or("chunk_size", 512)?,
            options.positive_or("min_sentences", 1)?,
        )
    }
}

impl Chunker for SentenceChunker {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn chunk(&self, text: &str) -> Result<Vec<Chunk>, ChunkerError> {
        let mut chunks = Vec::new();
        let mut group: Option<(usize, usize)> = None;
        let mut count = 0;

        for span in self.splitter.spans(text) {
            if let Some((start, end)) = group {
                let grown = text[start..span.end].chars().count();
                if count >= self.min_sentences && grown > self.chunk_size {
                    chunks.extend(Chunk::trimmed(text, start..end));
                    group = Some((span.start, span.end));
                    count = 1;
                    continue;
                }
                group = Some((start, span.end));
            } else {
                group = Some((span.start, span.end));
            }
            count += 1;
        }

        if let Some((start, end)) = group {
            chunks.extend(Chunk::trimmed(text, start..end));
        }

        Ok(chunks)
    }
}
