// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

use chaptertool::app_controller::Controller;
use chaptertool::logging::{ConsoleLogger, LogLevel};

/// ffmpeg_chapters - FFMETADATA chapter generator
///
/// Re-reads a plain HH:MM:SS chapter listing and emits an ffmpeg metadata
/// file with one [CHAPTER] block per listing line.
#[derive(Parser, Debug)]
#[command(name = "ffmpeg_chapters")]
#[command(version = "0.1.0")]
#[command(about = "Generate ffmpeg chapter metadata from a timestamp listing")]
#[command(long_about = "ffmpeg_chapters turns a chapters.txt timestamp listing into an ffmpeg
metadata file suitable for muxing chapters into an audiobook.

EXAMPLES:
    ffmpeg_chapters book/chapters.txt         # Writes book/ffmpeg_chapters.txt
    ffmpeg_chapters -l debug chapters.txt     # Show per-line parse details

The output file ffmpeg_chapters.txt is written next to the input listing.
Each chapter ends where the next one starts; the last chapter is padded
by 30 seconds.")]
struct CommandLineOptions {
    /// Plain-text chapter listing (HH:MM:SS Title per line)
    #[arg(value_name = "CHAPTERS_FILE")]
    chapters_file: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<LogLevel>,
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    ConsoleLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(level) = &cli.log_level {
        log::set_max_level(level.to_filter());
    }

    Controller::run_ffmpeg(&cli.chapters_file)?;
    Ok(())
}
