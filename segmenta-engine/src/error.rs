//! Layered error types
//!
//! Construction problems surface as [`SegmentError::Configuration`] or
//! [`SegmentError::Dependency`]; call-time problems as
//! [`SegmentError::InputType`] or [`SegmentError::Delegate`]. Nothing is
//! retried.

use crate::delegate::ChunkerError;
use segmenta_core::CoreError;
use thiserror::Error;

/// Errors raised by the segmenter
#[derive(Error, Debug)]
pub enum SegmentError {
    /// Conflicting or invalid configuration
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The named delegate chunker could not be provided
    #[error("dependency error: {0}")]
    Dependency(#[from] DependencyError),

    /// Input is neither a string nor a sequence of strings
    #[error("invalid input: {0}")]
    InputType(String),

    /// A delegate chunker failed while chunking
    #[error("chunker '{chunker}' failed: {source}")]
    Delegate {
        /// Name of the delegate
        chunker: String,
        /// Error raised by the delegate
        #[source]
        source: ChunkerError,
    },
}

/// Delegate availability errors, raised at construction
#[derive(Error, Debug)]
pub enum DependencyError {
    /// No factory is registered under this name
    #[error("unknown chunker '{name}' (available: {available})")]
    UnknownChunker {
        /// Requested name
        name: String,
        /// Comma-separated registered names
        available: String,
    },

    /// The chunker exists but its optional backend was compiled out
    #[error("chunker '{name}' is unavailable: rebuild with the '{feature}' feature")]
    Unavailable {
        /// Requested name
        name: String,
        /// Cargo feature providing the backend
        feature: &'static str,
    },

    /// The factory rejected its configuration
    #[error("failed to construct chunker '{name}': {source}")]
    InvalidOptions {
        /// Requested name
        name: String,
        /// Error raised by the factory
        #[source]
        source: ChunkerError,
    },
}

impl From<CoreError> for SegmentError {
    fn from(err: CoreError) -> Self {
        SegmentError::Configuration(err.to_string())
    }
}

impl From<toml::de::Error> for SegmentError {
    fn from(err: toml::de::Error) -> Self {
        SegmentError::Configuration(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, SegmentError>;
