//! Sentence splitter
//!
//! A single left-to-right scan that looks for terminator runs and decides,
//! from the surrounding characters and the language rules, whether each run
//! ends a sentence. The scan never looks more than one word back or ahead,
//! so it is linear in the input.

use super::{is_line_break, split_at_offsets, Splitter};
use crate::error::Result;
use crate::language::{EnclosureRole, LanguageRules};
use smallvec::SmallVec;
use std::ops::Range;
use std::sync::Arc;

/// Open asymmetric enclosures at the current scan position
type EnclosureStack = SmallVec<[u8; 8]>;

/// Language-aware sentence boundary detector
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    rules: Arc<LanguageRules>,
    blank_line_breaks: bool,
}

impl SentenceSplitter {
    /// Sentence splitter over owned rules
    pub fn new(rules: LanguageRules) -> Self {
        Self::with_rules(Arc::new(rules))
    }

    /// Sentence splitter over shared rules
    pub fn with_rules(rules: Arc<LanguageRules>) -> Self {
        Self {
            rules,
            blank_line_breaks: false,
        }
    }

    /// End a sentence at every blank line, even one without terminal
    /// punctuation before it. Off by default, so headings and list items
    /// without a period run into the following sentence.
    pub fn break_on_blank_lines(mut self, enabled: bool) -> Self {
        self.blank_line_breaks = enabled;
        self
    }

    /// Sentence splitter for an embedded language
    pub fn for_language(code: &str) -> Result<Self> {
        Ok(Self::new(LanguageRules::for_language(code)?))
    }

    /// English sentence splitter
    pub fn english() -> Result<Self> {
        Self::for_language("en")
    }

    /// The rules in use
    pub fn rules(&self) -> &LanguageRules {
        &self.rules
    }

    /// Byte offsets at which sentences end.
    ///
    /// A blank line closes any open enclosures. It also ends the sentence
    /// when an enclosure was left open or blank-line breaks are enabled;
    /// the offset reported for one is the start of the line break.
    pub fn boundaries(&self, text: &str) -> Vec<usize> {
        let rules = &*self.rules;
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let n = chars.len();
        let byte_at = |idx: usize| chars.get(idx).map_or(text.len(), |&(b, _)| b);

        let mut boundaries = Vec::new();
        let mut depth = EnclosureStack::new();
        let mut i = 0;

        while i < n {
            let ch = chars[i].1;

            // An unbalanced bracket must not swallow the rest of the document
            if starts_blank_line(&chars, i) {
                if self.blank_line_breaks || !depth.is_empty() {
                    let cut = byte_at(i);
                    if boundaries.last() != Some(&cut) {
                        boundaries.push(cut);
                    }
                }
                depth.clear();
                i += 1;
                continue;
            }

            match rules.enclosure(ch) {
                Some(EnclosureRole::Open(id)) => {
                    depth.push(id);
                    i += 1;
                    continue;
                }
                Some(EnclosureRole::Close(id)) => {
                    if depth.last() == Some(&id) {
                        depth.pop();
                    }
                    i += 1;
                    continue;
                }
                _ => {}
            }

            if !rules.is_terminal(ch) {
                i += 1;
                continue;
            }

            let run_start = i;
            let mut run_end = i;
            while run_end < n && rules.is_terminal(chars[run_end].1) {
                run_end += 1;
            }
            i = run_end;
            let run = &text[byte_at(run_start)..byte_at(run_end)];

            // Closing quotes and brackets right after the run belong to the
            // sentence it ends
            let mut end = run_end;
            let mut after_close = depth.clone();
            while end < n && rules.is_closing(chars[end].1) {
                if let Some(EnclosureRole::Close(id)) = rules.enclosure(chars[end].1) {
                    if after_close.last() == Some(&id) {
                        after_close.pop();
                    }
                }
                end += 1;
            }

            if !depth.is_empty() && (!rules.requires_whitespace() || !after_close.is_empty()) {
                continue;
            }

            let mut next = end;
            while next < n && chars[next].1.is_whitespace() {
                next += 1;
            }

            let is_boundary = if next == n {
                true
            } else if rules.is_ellipsis(run) && !rules.ellipsis_is_boundary() {
                false
            } else if !rules.requires_whitespace() {
                true
            } else {
                next > end
                    && starts_sentence(rules, chars[next].1)
                    && !(run == "." && self.is_abbreviation(text, byte_at(run_start), byte_at(next)))
            };

            if is_boundary {
                boundaries.push(byte_at(end));
                depth = after_close;
                i = end;
            }
        }

        boundaries
    }

    /// Whether the period at `dot` belongs to an abbreviation or initial
    /// rather than ending the sentence. `next` is where the following word
    /// starts.
    fn is_abbreviation(&self, text: &str, dot: usize, next: usize) -> bool {
        let rules = &*self.rules;
        let token = token_before(text, dot);
        if token.is_empty() {
            return false;
        }

        let category = rules.abbreviation(token);
        if category.is_none() && !is_initial(token) {
            return false;
        }
        if category.is_some_and(|c| rules.is_attached(c)) {
            return true;
        }

        !rules.is_sentence_starter(word_after(rules, text, next))
    }
}

impl Splitter for SentenceSplitter {
    fn name(&self) -> &'static str {
        "sentences"
    }

    fn spans(&self, text: &str) -> Vec<Range<usize>> {
        split_at_offsets(text, &self.boundaries(text))
    }
}

/// Whether the line break at `i` is followed by a blank line
fn starts_blank_line(chars: &[(usize, char)], i: usize) -> bool {
    let ch = chars[i].1;
    if ch == '\u{2029}' {
        return true;
    }
    if !is_line_break(ch) {
        return false;
    }

    let mut j = i + 1;
    if ch == '\r' && chars.get(j).is_some_and(|&(_, c)| c == '\n') {
        j += 1;
    }
    while let Some(&(_, c)) = chars.get(j) {
        if is_line_break(c) {
            return true;
        }
        if !c.is_whitespace() {
            return false;
        }
        j += 1;
    }
    false
}

/// Uppercase and uncased letters, or an opening quote or bracket
fn starts_sentence(rules: &LanguageRules, ch: char) -> bool {
    (ch.is_alphabetic() && !ch.is_lowercase()) || rules.is_opening(ch)
}

/// The word that ends at byte offset `end`, without leading punctuation
fn token_before(text: &str, end: usize) -> &str {
    let head = &text[..end];
    let start = head
        .char_indices()
        .rev()
        .find(|&(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8());
    head[start..].trim_start_matches(|c: char| !c.is_alphanumeric())
}

/// The alphanumeric word starting at `start`, skipping opening enclosures
fn word_after<'a>(rules: &LanguageRules, text: &'a str, start: usize) -> &'a str {
    let rest = text[start..].trim_start_matches(|c: char| rules.is_opening(c));
    let end = rest
        .find(|c: char| !c.is_alphanumeric())
        .unwrap_or(rest.len());
    &rest[..end]
}

/// A single capital letter, as in "J. R. Smith"
fn is_initial(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
}
