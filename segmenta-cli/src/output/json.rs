//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use segmenta_core::Chunk;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs chunks as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    source: String,
    index: usize,
    chunks: Vec<ChunkData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ChunkData {
    /// Input file the chunk came from
    pub source: String,
    /// Position of the chunk within its file
    pub index: usize,
    /// The chunk text
    pub text: String,
    /// Byte offset of the chunk start in the file
    pub start: usize,
    /// Byte offset one past the chunk end in the file
    pub end: usize,
    /// Length of the chunk text in characters
    pub length: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            source: String::new(),
            index: 0,
            chunks: Vec::new(),
        }
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn begin_source(&mut self, source: &str) -> Result<()> {
        self.source = source.to_string();
        self.index = 0;
        Ok(())
    }

    fn format_chunk(&mut self, chunk: &Chunk) -> Result<()> {
        self.chunks.push(ChunkData {
            source: self.source.clone(),
            index: self.index,
            text: chunk.text.clone(),
            start: chunk.start,
            end: chunk.end,
            length: chunk.char_len(),
        });
        self.index += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.chunks)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.chunks)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
