//! segmenta CLI library
//!
//! Command implementations, configuration loading, input resolution and
//! output formatting for the `segmenta` binary.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
