//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use segmenta_core::Chunk;
use std::io::{self, Write};

/// Plain text formatter - outputs one chunk per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn begin_source(&mut self, _source: &str) -> Result<()> {
        Ok(())
    }

    fn format_chunk(&mut self, chunk: &Chunk) -> Result<()> {
        writeln!(self.writer, "{}", chunk.text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
