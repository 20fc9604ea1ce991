//! Output formatting for the wordgrid CLI.

use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::search::SearchResults;

/// Print the ranked results in the requested format.
pub fn print_results(results: &SearchResults, format: OutputFormat, pretty: bool) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if results.words.is_empty() {
                println!("no words from the stream were found in the grid");
            }
            for word_match in &results.words {
                println!("{word_match}");
            }
            println!("({} distinct words searched)", results.total_words_searched);
        }
        OutputFormat::Json => {
            let json = if pretty {
                serde_json::to_string_pretty(results)?
            } else {
                serde_json::to_string(results)?
            };
            println!("{json}");
        }
    }

    Ok(())
}
