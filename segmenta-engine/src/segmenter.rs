//! The segmenter: mode dispatch, cleaning and joining

use crate::config::SegmenterConfig;
use crate::delegate::{Chunker, ChunkerRegistry};
use crate::error::{Result, SegmentError};
use crate::input::Input;
use crate::mode::SegmentationMode;
use crate::output::{join_chunks, Output, Segments};
use segmenta_core::{
    Chunk, Cleaner, LanguageRules, LineSplitter, ParagraphSplitter, SectionRule, SectionSplitter,
    SentenceSplitter, Splitter,
};
use std::fmt;
use std::sync::Arc;

enum Strategy {
    Rules(Box<dyn Splitter>),
    Delegate(Arc<dyn Chunker>),
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Rules(splitter) => f.debug_tuple("Rules").field(&splitter.name()).finish(),
            Strategy::Delegate(chunker) => f.debug_tuple("Delegate").field(&chunker.name()).finish(),
        }
    }
}

/// Splits text into chunks according to a fixed [`SegmenterConfig`]
///
/// Construction resolves everything that can fail for configuration
/// reasons: the mode, regexes, language rules and the delegate. Calls on
/// rule-based modes cannot fail afterwards.
#[derive(Debug)]
pub struct Segmenter {
    config: SegmenterConfig,
    mode: SegmentationMode,
    strategy: Strategy,
    cleaner: Cleaner,
    separator: String,
    registry: Arc<ChunkerRegistry>,
}

impl Segmenter {
    /// Create a segmenter with the built-in chunkers
    pub fn new(config: SegmenterConfig) -> Result<Self> {
        Self::with_registry(config, Arc::new(ChunkerRegistry::with_builtins()))
    }

    /// Create a segmenter resolving delegates through `registry`
    ///
    /// Segmenters sharing a registry share delegate instances with equal
    /// fingerprints.
    pub fn with_registry(config: SegmenterConfig, registry: Arc<ChunkerRegistry>) -> Result<Self> {
        let mode = config.validate()?;
        let strategy = match mode {
            SegmentationMode::Sentences => Strategy::Rules(Box::new(sentence_splitter(&config)?)),
            SegmentationMode::Lines => Strategy::Rules(Box::new(LineSplitter::new())),
            SegmentationMode::Paragraphs => Strategy::Rules(Box::new(ParagraphSplitter::new())),
            SegmentationMode::Sections => Strategy::Rules(Box::new(section_splitter(&config)?)),
            SegmentationMode::Delegate => {
                let spec = config.delegate().ok_or_else(|| {
                    SegmentError::Configuration("delegate mode without a chunker".to_string())
                })?;
                Strategy::Delegate(registry.resolve(&spec)?)
            }
        };

        let cleaner = Cleaner::new(config.cleantext, config.minlength);
        let separator = config
            .separator
            .clone()
            .unwrap_or_else(|| mode.default_separator().to_string());

        log::debug!("Segmenter ready: mode={mode}, strategy={strategy:?}");

        Ok(Self {
            config,
            mode,
            strategy,
            cleaner,
            separator,
            registry,
        })
    }

    /// Create a segmenter for a rule-based mode with default options
    pub fn for_mode(mode: SegmentationMode) -> Result<Self> {
        Self::new(SegmenterConfig::for_mode(mode))
    }

    /// Selected mode
    pub fn mode(&self) -> SegmentationMode {
        self.mode
    }

    /// Configuration this segmenter was built from
    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Separator used when joining
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Registry delegates are resolved through
    pub fn registry(&self) -> &Arc<ChunkerRegistry> {
        &self.registry
    }

    /// Segment one text into cleaned, structured chunks
    pub fn segment_chunks(&self, text: &str) -> Result<Vec<Chunk>> {
        let chunks = match &self.strategy {
            Strategy::Rules(splitter) => splitter.split(text),
            Strategy::Delegate(chunker) => {
                chunker
                    .chunk(text)
                    .map_err(|source| SegmentError::Delegate {
                        chunker: chunker.name().to_string(),
                        source,
                    })?
            }
        };

        Ok(self.cleaner.clean_all(chunks))
    }

    /// Segment one text into chunk strings, or one joined string
    pub fn segment(&self, text: &str) -> Result<Segments> {
        let chunks = self.segment_chunks(text)?;
        if self.config.join {
            Ok(Segments::Joined(join_chunks(&chunks, &self.separator)))
        } else {
            Ok(Segments::Chunks(
                chunks.into_iter().map(Chunk::into_text).collect(),
            ))
        }
    }

    /// Segment raw bytes, replacing malformed UTF-8 with U+FFFD
    pub fn segment_bytes(&self, bytes: &[u8]) -> Result<Segments> {
        self.segment(&segmenta_core::decode_lossy(bytes))
    }

    /// Segment independent texts, preserving their order
    pub fn segment_batch<S>(&self, texts: &[S]) -> Result<Vec<Segments>>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            texts
                .par_iter()
                .map(|text| self.segment(text.as_ref()))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            texts.iter().map(|text| self.segment(text.as_ref())).collect()
        }
    }

    /// Segment a single text or a batch, returning a result of the same shape
    pub fn process(&self, input: impl Into<Input>) -> Result<Output> {
        match input.into() {
            Input::Text(text) => self.segment(&text).map(Output::Single),
            Input::Batch(texts) => self.segment_batch(&texts).map(Output::Batch),
        }
    }
}

fn sentence_splitter(config: &SegmenterConfig) -> Result<SentenceSplitter> {
    let rules = match &config.language_config {
        Some(path) => LanguageRules::from_file(path)?,
        None => LanguageRules::for_language(config.language())?,
    };
    log::debug!(
        "Sentence rules: {} ({} abbreviations)",
        rules.language_code(),
        rules.abbreviation_count()
    );
    Ok(SentenceSplitter::new(rules).break_on_blank_lines(config.blank_line_breaks))
}

fn section_splitter(config: &SegmenterConfig) -> Result<SectionSplitter> {
    let rule = match (&config.section_pattern, &config.section_heading) {
        (Some(pattern), _) => SectionRule::separator(pattern)?,
        (None, Some(pattern)) => SectionRule::heading(pattern)?,
        (None, None) => SectionRule::Default,
    };
    Ok(SectionSplitter::with_rule(rule))
}
