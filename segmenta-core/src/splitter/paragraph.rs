//! Paragraph splitter

use super::{line_break_runs, split_around, Splitter};
use std::ops::Range;

const PARAGRAPH_SEPARATOR: char = '\u{2029}';

/// Splits on blank-line-delimited blocks
#[derive(Debug, Clone, Copy, Default)]
pub struct ParagraphSplitter;

impl ParagraphSplitter {
    /// Create a paragraph splitter
    pub fn new() -> Self {
        Self
    }
}

impl Splitter for ParagraphSplitter {
    fn name(&self) -> &'static str {
        "paragraphs"
    }

    fn spans(&self, text: &str) -> Vec<Range<usize>> {
        // Two or more line breaks, or an explicit paragraph separator
        let breaks = line_break_runs(text, 2, |ch| ch == PARAGRAPH_SEPARATOR);
        split_around(text, &breaks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraphs(text: &str) -> Vec<String> {
        ParagraphSplitter
            .split(text)
            .into_iter()
            .map(|c| c.text)
            .collect()
    }

    #[test]
    fn test_blank_line_separates() {
        assert_eq!(
            paragraphs("Para one.\n\nPara two."),
            vec!["Para one.", "Para two."]
        );
    }

    #[test]
    fn test_single_newline_does_not_separate() {
        assert_eq!(
            paragraphs("line one\nline two\n\nnext"),
            vec!["line one\nline two", "next"]
        );
    }

    #[test]
    fn test_whitespace_only_line_counts_as_blank() {
        assert_eq!(paragraphs("a\n \t \nb"), vec!["a", "b"]);
        assert_eq!(paragraphs("a\r\n\r\nb"), vec!["a", "b"]);
        assert_eq!(paragraphs("a\r\nb"), vec!["a\r\nb"]);
    }

    #[test]
    fn test_lone_carriage_returns() {
        assert_eq!(
            paragraphs("Para one.\r\rPara two."),
            vec!["Para one.", "Para two."]
        );
        assert_eq!(paragraphs("a\rb"), vec!["a\rb"]);
        assert_eq!(paragraphs("a\r\n\rb"), vec!["a", "b"]);
    }

    #[test]
    fn test_paragraph_separator_char() {
        assert_eq!(paragraphs("a\u{2029}b"), vec!["a", "b"]);
    }

    #[test]
    fn test_trimmed_and_empty_dropped() {
        assert_eq!(paragraphs("\n\n  a  \n\n\n\n  b\n\n"), vec!["a", "b"]);
        assert!(paragraphs("").is_empty());
    }
}
