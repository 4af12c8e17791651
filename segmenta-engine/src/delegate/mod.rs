//! Delegate chunkers
//!
//! A delegate is any named strategy that turns text into chunks. The
//! segmenter resolves one through a [`ChunkerRegistry`] when its
//! configuration names a `chunker`, and hands every input to it instead
//! of the built-in splitters.

mod options;
mod recursive;
mod registry;
mod sentence;
#[cfg(feature = "token")]
mod token;

pub use options::ChunkerOptions;
pub use recursive::RecursiveChunker;
pub use registry::{ChunkerFactory, ChunkerRegistry, Fingerprint};
pub use sentence::SentenceChunker;
#[cfg(feature = "token")]
pub use token::TokenChunker;

use segmenta_core::Chunk;
use std::fmt;
use thiserror::Error;

/// Errors raised by delegate factories and chunkers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChunkerError {
    /// An option has the wrong type or an out-of-range value
    #[error("option '{key}' must be {expected}")]
    InvalidOption {
        /// Option key
        key: String,
        /// Description of the accepted values
        expected: &'static str,
    },

    /// The chunker does not understand an option
    #[error("unrecognized option '{0}'")]
    UnknownOption(String),

    /// Any other failure inside the chunker
    #[error("{0}")]
    Backend(String),
}

/// A named chunking strategy
///
/// Returned chunks must be in document order; empty and whitespace-only
/// chunks are discarded by the caller.
pub trait Chunker: Send + Sync + fmt::Debug {
    /// Registry name
    fn name(&self) -> &str;

    /// Chunk a single text
    fn chunk(&self, text: &str) -> Result<Vec<Chunk>, ChunkerError>;
}
