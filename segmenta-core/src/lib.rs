//! Rule-based text segmentation
//!
//! This crate splits text into sentences, lines, paragraphs and sections.
//! Every splitter is a pure function over its input: no I/O, no shared
//! mutable state, no failure modes once constructed.
//!
//! # Architecture
//!
//! - [`splitter`]: the four rule-based splitters behind the [`Splitter`] trait
//! - [`language`]: data-driven sentence rules loaded from TOML
//! - [`clean`]: whitespace normalization and minimum-length filtering
//! - [`chunk`]: the [`Chunk`] type every splitter produces
//!
//! # Example
//!
//! ```rust
//! use segmenta_core::{Cleaner, SentenceSplitter, Splitter};
//!
//! let splitter = SentenceSplitter::english().unwrap();
//! let chunks = Cleaner::default().clean_all(splitter.split("Mr. Smith left. We stayed."));
//!
//! let sentences: Vec<_> = chunks.iter().map(|c| c.text.as_str()).collect();
//! assert_eq!(sentences, vec!["Mr. Smith left.", "We stayed."]);
//! ```

pub mod chunk;
pub mod clean;
pub mod error;
pub mod language;
pub mod splitter;

pub use chunk::Chunk;
pub use clean::Cleaner;
pub use error::{CoreError, Result};
pub use language::{LanguageConfig, LanguageRules};
pub use splitter::{
    LineSplitter, ParagraphSplitter, SectionRule, SectionSplitter, SentenceSplitter, Splitter,
};

/// Decode bytes as UTF-8, replacing malformed sequences with U+FFFD so the
/// splitters can treat them as ordinary characters
pub fn decode_lossy(bytes: &[u8]) -> std::borrow::Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}
