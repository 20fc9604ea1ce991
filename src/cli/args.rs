//! Command line argument parsing for the wordgrid CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::search::config::DEFAULT_RESULT_LIMIT;

/// Wordgrid - find and rank word-stream occurrences in a character grid
#[derive(Parser, Debug, Clone)]
#[command(name = "wordgrid")]
#[command(about = "Find and rank word-stream occurrences in a character grid")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordGridArgs {
    /// Path to the grid file, one row per line
    #[arg(value_name = "GRID")]
    pub grid: Option<PathBuf>,

    /// Path to the word stream file, one word per line (stdin when omitted)
    #[arg(value_name = "WORDS")]
    pub words: Option<PathBuf>,

    /// Maximum number of ranked words to report
    #[arg(short, long, default_value_t = DEFAULT_RESULT_LIMIT)]
    pub limit: usize,

    /// Search the word stream sequentially instead of on a thread pool
    #[arg(long)]
    pub sequential: bool,

    /// Thread pool size (defaults to the number of CPU cores)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Available output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per ranked word plus its match details
    Human,
    /// The full result set as JSON
    Json,
}
