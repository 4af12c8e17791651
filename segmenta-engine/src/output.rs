//! Call outputs

use segmenta_core::Chunk;
use serde::Serialize;

/// Segmentation result for one input text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Segments {
    /// Chunk texts in document order
    Chunks(Vec<String>),
    /// Chunk texts joined with the separator
    Joined(String),
}

impl Segments {
    /// Chunk list, unless the result was joined
    pub fn as_chunks(&self) -> Option<&[String]> {
        match self {
            Segments::Chunks(chunks) => Some(chunks),
            Segments::Joined(_) => None,
        }
    }

    /// Joined string, if the result was joined
    pub fn as_joined(&self) -> Option<&str> {
        match self {
            Segments::Joined(text) => Some(text),
            Segments::Chunks(_) => None,
        }
    }

    /// Texts to emit, one per chunk or a single joined text. An empty
    /// joined result yields nothing.
    pub fn into_texts(self) -> Vec<String> {
        match self {
            Segments::Chunks(chunks) => chunks,
            Segments::Joined(text) if text.is_empty() => Vec::new(),
            Segments::Joined(text) => vec![text],
        }
    }
}

/// Result of [`Segmenter::process`](crate::Segmenter::process), shaped
/// like its input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Output {
    /// Result for a single text
    Single(Segments),
    /// Results for a batch, in input order
    Batch(Vec<Segments>),
}

impl Output {
    /// Flatten into per-input results
    pub fn into_segments(self) -> Vec<Segments> {
        match self {
            Output::Single(segments) => vec![segments],
            Output::Batch(segments) => segments,
        }
    }
}

/// Concatenate chunk texts with `separator`
pub fn join_chunks(chunks: &[Chunk], separator: &str) -> String {
    chunks
        .iter()
        .map(|chunk| chunk.text.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}
