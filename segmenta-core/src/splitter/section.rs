//! Section splitter

use super::{line_break_runs, split_around, split_at_matches, split_at_offsets, Splitter};
use crate::error::{CoreError, Result};
use regex::{Regex, RegexBuilder};
use std::ops::Range;
use std::sync::OnceLock;

const FORM_FEED: char = '\u{0C}';

/// How section boundaries are recognised
#[derive(Debug, Clone, Default)]
pub enum SectionRule {
    /// Form feeds and runs of two or more blank lines
    #[default]
    Default,
    /// Split at every match; the matched text is dropped
    Separator(Regex),
    /// Every line containing a match starts a new section and is kept
    /// as its first line
    Heading(Regex),
}

impl SectionRule {
    /// Separator rule from a regular expression
    pub fn separator(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| CoreError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(SectionRule::Separator(regex))
    }

    /// Heading rule from a regular expression, compiled in multi-line mode
    /// so `^` and `$` anchor at line boundaries
    pub fn heading(pattern: &str) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .multi_line(true)
            .crlf(true)
            .build()
            .map_err(|source| CoreError::Pattern {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(SectionRule::Heading(regex))
    }

    /// Markdown ATX headings (`#` through `######`)
    pub fn markdown_headings() -> Self {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let regex = PATTERN.get_or_init(|| {
            RegexBuilder::new(r"^#{1,6}\s")
                .multi_line(true)
                .build()
                .expect("valid markdown heading pattern")
        });
        SectionRule::Heading(regex.clone())
    }
}

/// Splits text into coarse structural sections
#[derive(Debug, Clone, Default)]
pub struct SectionSplitter {
    rule: SectionRule,
}

impl SectionSplitter {
    /// Section splitter with the built-in default rule
    pub fn new() -> Self {
        Self::default()
    }

    /// Section splitter with an explicit rule
    pub fn with_rule(rule: SectionRule) -> Self {
        Self { rule }
    }

    /// The rule in use
    pub fn rule(&self) -> &SectionRule {
        &self.rule
    }

    fn heading_cuts(heading: &Regex, text: &str) -> Vec<usize> {
        let mut cuts: Vec<usize> = heading
            .find_iter(text)
            .map(|m| text[..m.start()].rfind('\n').map_or(0, |i| i + 1))
            .collect();
        cuts.dedup();
        cuts
    }
}

impl Splitter for SectionSplitter {
    fn name(&self) -> &'static str {
        "sections"
    }

    fn spans(&self, text: &str) -> Vec<Range<usize>> {
        match &self.rule {
            // Three or more line breaks: at least two blank lines
            SectionRule::Default => {
                split_around(text, &line_break_runs(text, 3, |ch| ch == FORM_FEED))
            }
            SectionRule::Separator(separator) => split_at_matches(separator, text),
            SectionRule::Heading(heading) => {
                split_at_offsets(text, &Self::heading_cuts(heading, text))
            }
        }
    }
}
