//! segmenta command-line entry point

use anyhow::Result;
use clap::Parser;
use segmenta_cli::commands::Commands;

/// Split text into sentences, lines, paragraphs, sections or delegate chunks
#[derive(Debug, Parser)]
#[command(name = "segmenta", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    Cli::parse().command.execute()
}
