//! Match records produced by the search phase.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid::Position;
use crate::search::matcher::Direction;

/// A single confirmed occurrence of a word on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDetail {
    /// The axis the occurrence lies along.
    pub direction: Direction,
    /// Coordinate of the word's first character.
    pub from: Position,
    /// Coordinate of the word's last character.
    pub to: Position,
}

impl fmt::Display for MatchDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, from {} to {}", self.direction, self.from, self.to)
    }
}

/// Every occurrence found for one word of the stream.
///
/// Only words with at least one occurrence are materialized; a `WordMatch`
/// with an empty `matches` list never reaches callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordMatch {
    /// The word, in the casing the caller supplied.
    pub word: String,
    /// All confirmed occurrences, in candidate scan order.
    pub matches: Vec<MatchDetail>,
}

impl WordMatch {
    /// Number of occurrences found in the grid.
    pub fn count(&self) -> usize {
        self.matches.len()
    }
}

impl fmt::Display for WordMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.matches.len() == 1 { "" } else { "s" };
        write!(
            f,
            "word \"{}\" found {} time{}:",
            self.word,
            self.matches.len(),
            plural
        )?;
        for detail in &self.matches {
            write!(f, "\n  - {detail}")?;
        }
        Ok(())
    }
}

/// Ranked output of a search over a word stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    /// The top words by match count, best first.
    pub words: Vec<WordMatch>,
    /// Number of distinct words searched after deduplication.
    pub total_words_searched: usize,
}
