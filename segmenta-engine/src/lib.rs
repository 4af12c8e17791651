//! Mode dispatch and delegate chunking for segmenta
//!
//! This crate turns a [`SegmenterConfig`] into a [`Segmenter`] that splits
//! text into sentences, lines, paragraphs or sections using the rule-based
//! splitters of `segmenta-core`, or hands it to a named delegate
//! [`Chunker`] resolved through a [`ChunkerRegistry`].
//!
//! # Example
//!
//! ```rust
//! use segmenta_engine::{Segmenter, SegmenterConfig, Segments};
//!
//! let config = SegmenterConfig::builder().sentences().build().unwrap();
//! let segmenter = Segmenter::new(config).unwrap();
//!
//! let result = segmenter.segment("This is a test. And another test.").unwrap();
//! assert_eq!(
//!     result,
//!     Segments::Chunks(vec!["This is a test.".into(), "And another test.".into()])
//! );
//! ```
//!
//! # Features
//!
//! - `parallel` (default): batches are segmented on the rayon pool.
//! - `token`: registers the `token` delegate. Without it, naming that
//!   chunker fails with [`DependencyError::Unavailable`]. Its tests only
//!   run with the feature enabled, e.g.
//!   `cargo test -p segmenta-engine --all-features`.

#![warn(missing_docs)]

pub mod config;
pub mod delegate;
pub mod error;
pub mod input;
pub mod mode;
pub mod output;
pub mod segmenter;

// Re-export key types
pub use config::{SegmenterConfig, SegmenterConfigBuilder, SEGMENTATION_KEY};
pub use delegate::{Chunker, ChunkerError, ChunkerOptions, ChunkerRegistry};
pub use error::{DependencyError, Result, SegmentError};
pub use input::Input;
pub use mode::{DelegateSpec, SegmentationMode};
pub use output::{Output, Segments};
pub use segmenter::Segmenter;

// Re-export from core for convenience
pub use segmenta_core::{Chunk, LanguageRules};

/// Chunker names this build can resolve without custom registration
pub fn available_chunkers() -> Vec<String> {
    ChunkerRegistry::with_builtins()
        .names()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Language codes with embedded sentence rules
pub fn available_languages() -> Vec<&'static str> {
    segmenta_core::language::list_available_languages()
}
