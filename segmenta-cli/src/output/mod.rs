//! Output formatting module

use anyhow::Result;
use segmenta_core::Chunk;

/// Writes chunks in some output format
pub trait OutputFormatter: Send {
    /// Start the chunks of a new input file
    fn begin_source(&mut self, source: &str) -> Result<()>;

    /// Format and output a single chunk
    fn format_chunk(&mut self, chunk: &Chunk) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
