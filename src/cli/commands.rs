//! Command implementation for the wordgrid CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::cli::args::WordGridArgs;
use crate::cli::output;
use crate::error::{Result, WordGridError};
use crate::grid::GridIndex;
use crate::search::{SearchConfig, SearchEngine};

/// Execute the search described by the parsed arguments.
///
/// The grid is loaded from the GRID file; the word stream comes from the
/// WORDS file, or from stdin when no file is given.
pub fn execute(args: WordGridArgs) -> Result<()> {
    let grid_path = args.grid.as_deref().ok_or(WordGridError::NullInput)?;
    let rows = read_lines(grid_path)?;
    let index = GridIndex::new(&rows)?;

    let words = match args.words.as_deref() {
        Some(path) => read_lines(path)?,
        None => read_stream(io::stdin().lock())?,
    };

    let config = SearchConfig {
        limit: args.limit,
        parallel: !args.sequential,
        thread_pool_size: args.threads,
    };

    let engine = SearchEngine::with_config(index, config)?;
    let results = engine.find(&words);

    output::print_results(&results, args.output_format, args.pretty)
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    read_stream(BufReader::new(File::open(path)?))
}

fn read_stream<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?);
    }
    Ok(lines)
}
