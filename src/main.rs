// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use log::LevelFilter;
use std::path::PathBuf;

use chaptertool::app_controller::Controller;
use chaptertool::logging::{ConsoleLogger, LogLevel};

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert chapter metadata into timestamp files (default command)
    Convert(ConvertArgs),

    /// Generate shell completions for chaptertool
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Book directory or chapter JSON file to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<LogLevel>,
}

/// chaptertool - audiobook chapter timestamp converter
///
/// Reads audiobook chapter metadata, resolves every chapter to an absolute
/// start time and writes chapters.json plus a plain HH:MM:SS listing.
#[derive(Parser, Debug)]
#[command(name = "chaptertool")]
#[command(version = "0.1.0")]
#[command(about = "Audiobook chapter timestamp converter")]
#[command(long_about = "chaptertool reads audiobook chapter metadata and writes normalized chapter files.

EXAMPLES:
    chaptertool book/chapters.json            # Convert an explicit JSON file
    chaptertool /audiobooks/some-book         # Discover the metadata inside a book directory
    chaptertool -l debug /audiobooks/book     # Show discovery and resolution details
    chaptertool completions bash > ct.bash    # Generate bash completions

DISCOVERY:
    When INPUT_PATH is not a file itself, metadata/metadata.json is tried
    first, then chapters.json, both relative to INPUT_PATH. The outputs
    (chapters.json and chapters.txt) land next to the book, never inside
    its metadata/ directory.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Book directory or chapter JSON file to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<LogLevel>,
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // The level is adjusted after argument parsing if needed
    ConsoleLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "chaptertool", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Convert(args)) => {
            // Use the explicit convert subcommand args
            run_convert(args)
        }
        None => {
            // Default behavior - a bare INPUT_PATH works without a subcommand
            let input_path = cli
                .input_path
                .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;

            let convert_args = ConvertArgs {
                input_path,
                log_level: cli.log_level,
            };
            run_convert(convert_args)
        }
    }
}

fn run_convert(options: ConvertArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(level) = &options.log_level {
        log::set_max_level(level.to_filter());
    }

    Controller::run_convert(&options.input_path)?;
    Ok(())
}
