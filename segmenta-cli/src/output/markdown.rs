//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use segmenta_core::Chunk;
use std::io::Write;

/// Markdown formatter - outputs chunks as a numbered list per file
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    chunk_count: usize,
    total: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chunk_count: 0,
            total: 0,
        }
    }
}

impl<W: Write + Send> OutputFormatter for MarkdownFormatter<W> {
    fn begin_source(&mut self, source: &str) -> Result<()> {
        if self.total > 0 {
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        self.chunk_count = 0;
        Ok(())
    }

    fn format_chunk(&mut self, chunk: &Chunk) -> Result<()> {
        self.chunk_count += 1;
        self.total += 1;
        // Continuation lines are indented to stay inside the list item
        let text = chunk.text.replace('\n', "\n   ");
        writeln!(self.writer, "{}. {}", self.chunk_count, text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total chunks: {}*", self.total)?;
        self.writer.flush()?;
        Ok(())
    }
}
