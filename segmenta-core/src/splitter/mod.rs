//! Rule-based splitters
//!
//! Every splitter is a pure function from text to an ordered list of
//! non-overlapping byte spans. Spans never include surrounding whitespace
//! and whitespace-only spans are never produced, so empty input always
//! yields an empty list and text without boundaries yields one span
//! covering the trimmed input.

mod line;
mod paragraph;
mod section;
mod sentence;

pub use line::LineSplitter;
pub use paragraph::ParagraphSplitter;
pub use section::{SectionRule, SectionSplitter};
pub use sentence::SentenceSplitter;

use crate::chunk::{trimmed_span, Chunk};
use regex::Regex;
use std::fmt;
use std::ops::Range;

/// Line terminators recognised by every splitter
pub(crate) const LINE_BREAK: &str = r"(?:\r\n|[\n\r\x0B\x0C\x{85}\x{2028}\x{2029}])";

/// Characters matched by [`LINE_BREAK`]
pub(crate) fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// A strategy that splits text at unit boundaries
pub trait Splitter: Send + Sync + fmt::Debug {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Byte spans of each unit, in order
    fn spans(&self, text: &str) -> Vec<Range<usize>>;

    /// Units as chunks, in order
    fn split(&self, text: &str) -> Vec<Chunk> {
        self.spans(text)
            .into_iter()
            .map(|span| Chunk::from_span(text, span))
            .collect()
    }
}

/// Split at every match of `separator`, dropping the matched text
pub(crate) fn split_at_matches(separator: &Regex, text: &str) -> Vec<Range<usize>> {
    let matches: Vec<Range<usize>> = separator.find_iter(text).map(|m| m.range()).collect();
    split_around(text, &matches)
}

/// Runs of line breaks separated only by horizontal whitespace that hold at
/// least `min_breaks` breaks, or any break for which `forces` holds.
///
/// `\r\n` counts as one break and a lone `\r` as one. Each run spans from
/// its first break to the end of its last.
pub(crate) fn line_break_runs(
    text: &str,
    min_breaks: usize,
    forces: impl Fn(char) -> bool,
) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        if !is_line_break(ch) {
            continue;
        }

        let mut end = start + ch.len_utf8();
        let mut breaks = 1;
        let mut forced = forces(ch);
        let mut prev = ch;
        while let Some(&(offset, next)) = chars.peek() {
            if is_line_break(next) {
                if !(prev == '\r' && next == '\n') {
                    breaks += 1;
                }
                forced |= forces(next);
                end = offset + next.len_utf8();
            } else if !next.is_whitespace() {
                break;
            }
            prev = next;
            chars.next();
        }

        if forced || breaks >= min_breaks {
            runs.push(start..end);
        }
    }

    runs
}

/// Split around the given separator ranges, which must be sorted and
/// disjoint
pub(crate) fn split_around(text: &str, separators: &[Range<usize>]) -> Vec<Range<usize>> {
    let mut spans = Vec::with_capacity(separators.len() + 1);
    let mut last = 0;

    for separator in separators {
        spans.extend(trimmed_span(text, last, separator.start));
        last = separator.end;
    }
    spans.extend(trimmed_span(text, last, text.len()));

    spans
}

/// Split at the given cut points, which must be sorted byte offsets
pub(crate) fn split_at_offsets(text: &str, cuts: &[usize]) -> Vec<Range<usize>> {
    let mut spans = Vec::with_capacity(cuts.len() + 1);
    let mut last = 0;

    for &cut in cuts {
        if cut > last {
            spans.extend(trimmed_span(text, last, cut));
            last = cut;
        }
    }
    spans.extend(trimmed_span(text, last, text.len()));

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_at_matches() {
        let separator = Regex::new(",").unwrap();
        let text = " a, b ,, c ";
        let pieces: Vec<_> = split_at_matches(&separator, text)
            .into_iter()
            .map(|s| &text[s])
            .collect();
        assert_eq!(pieces, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_at_offsets() {
        let text = "one two three";
        let pieces: Vec<_> = split_at_offsets(text, &[3, 7, 7])
            .into_iter()
            .map(|s| &text[s])
            .collect();
        assert_eq!(pieces, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_line_break_runs() {
        let text = "a\r\nb\r\n \r\nc\r\rd";
        assert_eq!(line_break_runs(text, 2, |_| false), vec![4..9, 10..12]);
        assert_eq!(line_break_runs(text, 3, |_| false), Vec::<Range<usize>>::new());
        assert_eq!(line_break_runs("a\x0Cb", 3, |c| c == '\x0C'), vec![1..2]);
    }

    #[test]
    fn test_split_empty_text() {
        let separator = Regex::new(",").unwrap();
        assert!(split_at_matches(&separator, "").is_empty());
        assert!(split_at_offsets("", &[]).is_empty());
    }
}
