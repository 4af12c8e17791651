//! Line splitter

use super::{split_at_matches, Splitter, LINE_BREAK};
use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

fn line_breaks() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(&format!("{LINE_BREAK}+")).expect("valid line break pattern"))
}

/// Splits on line terminators; blank lines are dropped
#[derive(Debug, Clone, Copy, Default)]
pub struct LineSplitter;

impl LineSplitter {
    /// Create a line splitter
    pub fn new() -> Self {
        Self
    }
}

impl Splitter for LineSplitter {
    fn name(&self) -> &'static str {
        "lines"
    }

    fn spans(&self, text: &str) -> Vec<Range<usize>> {
        split_at_matches(line_breaks(), text)
    }
}
