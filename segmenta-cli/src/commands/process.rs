//! Process command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rayon::prelude::*;
use segmenta_core::Chunk;
use segmenta_engine::output::join_chunks;
use segmenta_engine::{ChunkerOptions, SegmentationMode, Segmenter, SegmenterConfig};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text, or the config file's default_format]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Segmentation mode
    #[arg(short, long, value_enum, conflicts_with = "chunker")]
    pub mode: Option<Mode>,

    /// Delegate chunker name (see `segmenta list chunkers`)
    #[arg(long, value_name = "NAME")]
    pub chunker: Option<String>,

    /// Delegate chunker option; VALUE is parsed as JSON when possible
    #[arg(long = "option", value_name = "KEY=VALUE")]
    pub options: Vec<String>,

    /// Join the chunks of each file into one
    #[arg(long)]
    pub join: bool,

    /// Separator used by --join
    #[arg(long, value_name = "S")]
    pub separator: Option<String>,

    /// Drop chunks shorter than N characters
    #[arg(long, value_name = "N")]
    pub minlength: Option<usize>,

    /// Keep space runs inside chunks
    #[arg(long)]
    pub no_clean: bool,

    /// Language for sentence rules
    #[arg(short, long, value_name = "LANG", conflicts_with = "language_config")]
    pub language: Option<String>,

    /// Sentence rules from a language TOML file
    #[arg(long, value_name = "FILE")]
    pub language_config: Option<PathBuf>,

    /// End sentences at blank lines even without terminal punctuation
    #[arg(long)]
    pub blank_line_breaks: bool,

    /// Configuration file with a [segmentation] table
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of worker threads (default: one per CPU)
    #[arg(short, long, value_name = "THREADS")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one chunk per line
    Text,
    /// JSON array of chunks with offsets
    Json,
    /// Markdown formatted output
    Markdown,
}

/// Rule-based segmentation modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Sentence boundaries
    Sentences,
    /// Line terminators
    Lines,
    /// Blank-line-delimited blocks
    Paragraphs,
    /// Form feeds and runs of blank lines
    Sections,
}

impl From<Mode> for SegmentationMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Sentences => SegmentationMode::Sentences,
            Mode::Lines => SegmentationMode::Lines,
            Mode::Paragraphs => SegmentationMode::Paragraphs,
            Mode::Sections => SegmentationMode::Sections,
        }
    }
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting text processing");
        log::debug!("Arguments: {self:?}");

        let cli_config = CliConfig::load_or_default(self.config.as_deref())?;
        let format = self.output_format(&cli_config)?;
        let config = self.segmenter_config(cli_config.segmentation)?;
        let join = config.join;

        let segmenter = Segmenter::new(config).context("Failed to build segmenter")?;
        log::info!("Mode: {}", segmenter.mode());

        self.init_thread_pool(cli_config.performance.threads());

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to process", files.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let results = files
            .par_iter()
            .map(|path| {
                let chunks = segment_file(&segmenter, path, join)?;
                progress.file_completed(&path.display().to_string());
                Ok((path, chunks))
            })
            .collect::<Result<Vec<_>>>();
        progress.finish();
        let results = results?;

        let mut formatter = self.create_formatter(format, cli_config.output.pretty_json)?;
        for (path, chunks) in &results {
            formatter.begin_source(&path.display().to_string())?;
            for chunk in chunks {
                formatter.format_chunk(chunk)?;
            }
        }
        formatter.finish()?;

        log::info!(
            "Wrote {} chunk(s) from {} file(s)",
            results.iter().map(|(_, chunks)| chunks.len()).sum::<usize>(),
            results.len()
        );
        Ok(())
    }

    /// Apply command-line overrides on top of the configuration file
    pub fn segmenter_config(&self, mut config: SegmenterConfig) -> Result<SegmenterConfig> {
        if let Some(mode) = self.mode {
            config.set_mode(mode.into());
            config.options = ChunkerOptions::new();
        }

        if let Some(name) = &self.chunker {
            config.set_mode(SegmentationMode::Delegate);
            config.chunker = Some(name.clone());
        }

        for pair in &self.options {
            let (key, value) = ChunkerOptions::parse_pair(pair)
                .ok_or_else(|| CliError::InvalidOption(pair.clone()))?;
            config.options.insert(key, value);
        }

        if self.join {
            config.join = true;
        }
        if let Some(separator) = &self.separator {
            config.separator = Some(separator.clone());
        }
        if let Some(minlength) = self.minlength {
            config.minlength = Some(minlength);
        }
        if self.no_clean {
            config.cleantext = false;
        }
        if self.blank_line_breaks {
            config.blank_line_breaks = true;
        }
        if let Some(language) = &self.language {
            config.language = Some(language.clone());
            config.language_config = None;
        }
        if let Some(path) = &self.language_config {
            config.language_config = Some(path.clone());
            config.language = None;
        }

        config.validate()?;
        Ok(config)
    }

    fn output_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                config.output.default_format
            ))
            .into()
        })
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        pretty_json: bool,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }

    fn init_thread_pool(&self, configured: usize) {
        let threads = self.threads.unwrap_or(configured).max(1);
        log::debug!("Using {threads} worker thread(s)");
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
        {
            log::debug!("Thread pool already initialized: {e}");
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running under tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

fn segment_file(segmenter: &Segmenter, path: &Path, join: bool) -> Result<Vec<Chunk>> {
    let text = FileReader::read_text(path)?;
    let chunks = segmenter
        .segment_chunks(&text)
        .map_err(|e| CliError::ProcessingError(format!("{}: {e}", path.display())))?;

    if !join {
        return Ok(chunks);
    }

    // One joined chunk spanning the first to the last chunk
    match (chunks.first(), chunks.last()) {
        (Some(first), Some(last)) => Ok(vec![Chunk::new(
            join_chunks(&chunks, segmenter.separator()),
            first.start,
            last.end,
        )]),
        _ => Ok(Vec::new()),
    }
}
