//! Word stream search and ranking over a grid index.

use ahash::AHashSet;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::{Result, WordGridError};
use crate::grid::{GridIndex, fold_char};
use crate::search::collector::TopWordsCollector;
use crate::search::config::SearchConfig;
use crate::search::matcher::{Direction, DirectionalMatcher};
use crate::search::results::{MatchDetail, SearchResults, WordMatch};

/// Searches a word stream against a grid and ranks the findings.
///
/// The engine owns its [`GridIndex`]; the index is read-only after
/// construction, so per-word searches run concurrently against it without
/// locking. Worker results are merged in stream order, which keeps the
/// ranked output identical between parallel and sequential execution.
pub struct SearchEngine {
    index: GridIndex,
    config: SearchConfig,
    thread_pool: Option<ThreadPool>,
}

impl SearchEngine {
    /// Create an engine with the default configuration.
    pub fn new(index: GridIndex) -> Result<Self> {
        Self::with_config(index, SearchConfig::default())
    }

    /// Create an engine with an explicit configuration.
    pub fn with_config(index: GridIndex, config: SearchConfig) -> Result<Self> {
        let thread_pool = if config.parallel {
            let threads = config.thread_pool_size.unwrap_or_else(num_cpus::get);
            let pool = ThreadPoolBuilder::new()
                .num_threads(threads)
                .thread_name(|i| format!("wordgrid-search-{i}"))
                .build()
                .map_err(|e| WordGridError::ThreadPool(e.to_string()))?;
            Some(pool)
        } else {
            None
        };

        Ok(Self {
            index,
            config,
            thread_pool,
        })
    }

    /// The grid index this engine searches.
    pub fn index(&self) -> &GridIndex {
        &self.index
    }

    /// Search every word of `words` and return the ranked results.
    ///
    /// Words repeated in the stream (case-insensitively) are searched once;
    /// the first occurrence's casing is kept. Words with no occurrence in
    /// the grid are excluded from the output. The result holds at most
    /// `config.limit` entries, sorted by descending match count with ties in
    /// stream order. This operation never fails: an empty, repeated, or
    /// unmatched word is a normal zero-match outcome.
    pub fn find<I, S>(&self, words: I) -> SearchResults
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<S> = words.into_iter().collect();
        let stream = dedupe_words(&words);

        let found: Vec<WordMatch> = match &self.thread_pool {
            Some(pool) => pool.install(|| {
                stream
                    .par_iter()
                    .filter_map(|word| self.find_word(word))
                    .collect()
            }),
            None => stream
                .iter()
                .filter_map(|word| self.find_word(word))
                .collect(),
        };

        // Both collection paths preserve stream order, so the enumeration
        // index below is a valid arrival ordinal for tie-breaking.
        let mut collector = TopWordsCollector::new(self.config.limit);
        for (ordinal, word_match) in found.into_iter().enumerate() {
            collector.collect(ordinal, word_match);
        }

        SearchResults {
            words: collector.into_ranked(),
            total_words_searched: stream.len(),
        }
    }

    /// Locate every occurrence of a single word in the grid.
    ///
    /// Returns `None` when the word is empty or has no occurrence, so
    /// unmatched words are never materialized.
    fn find_word(&self, word: &str) -> Option<WordMatch> {
        let chars: Vec<char> = word.chars().collect();
        let first = *chars.first()?;

        let matcher = DirectionalMatcher::new(self.index.grid());
        let mut matches = Vec::new();

        for &start in self.index.positions_of(first) {
            for direction in Direction::ALL {
                if let Some(end) = matcher.match_from(&chars, start, direction) {
                    matches.push(MatchDetail {
                        direction,
                        from: start,
                        to: end,
                    });
                }
            }
        }

        if matches.is_empty() {
            None
        } else {
            Some(WordMatch {
                word: word.to_string(),
                matches,
            })
        }
    }
}

/// Drop case-insensitive repeats from the stream, keeping first occurrences
/// in order.
fn dedupe_words<S: AsRef<str>>(words: &[S]) -> Vec<&str> {
    let mut seen = AHashSet::with_capacity(words.len());
    let mut stream = Vec::with_capacity(words.len());

    for word in words {
        let word = word.as_ref();
        let folded: String = word.chars().map(fold_char).collect();
        if seen.insert(folded) {
            stream.push(word);
        }
    }

    stream
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;

    fn engine(rows: &[&str]) -> SearchEngine {
        SearchEngine::new(GridIndex::new(rows).unwrap()).unwrap()
    }

    #[test]
    fn test_find_word_in_both_directions() {
        // "aa" lies both rightward and downward from (0,0).
        let engine = engine(&["aab", "acd", "efg"]);
        let results = engine.find(["aa"]);

        assert_eq!(results.words.len(), 1);
        let word_match = &results.words[0];
        assert_eq!(word_match.word, "aa");
        assert_eq!(
            word_match.matches,
            vec![
                MatchDetail {
                    direction: Direction::LeftToRight,
                    from: Position::new(0, 0),
                    to: Position::new(1, 0),
                },
                MatchDetail {
                    direction: Direction::TopToBottom,
                    from: Position::new(0, 0),
                    to: Position::new(0, 1),
                },
            ]
        );
    }

    #[test]
    fn test_unmatched_words_are_excluded() {
        let engine = engine(&["ab", "cd"]);
        let results = engine.find(["ab", "zz", "ba"]);

        assert_eq!(results.words.len(), 1);
        assert_eq!(results.words[0].word, "ab");
        assert_eq!(results.total_words_searched, 3);
    }

    #[test]
    fn test_empty_word_is_a_zero_match_outcome() {
        let engine = engine(&["ab", "cd"]);
        let results = engine.find(["", "ab"]);

        assert_eq!(results.words.len(), 1);
        assert_eq!(results.words[0].word, "ab");
    }

    #[test]
    fn test_duplicate_words_searched_once() {
        let engine = engine(&["ab", "cd"]);
        let results = engine.find(["ab", "AB", "ab"]);

        assert_eq!(results.total_words_searched, 1);
        assert_eq!(results.words.len(), 1);
        // First occurrence's casing wins.
        assert_eq!(results.words[0].word, "ab");
    }

    #[test]
    fn test_dedupe_is_case_insensitive_and_keeps_order() {
        let words = ["Cold", "wind", "COLD", "Wind", "snow"];
        assert_eq!(dedupe_words(&words), vec!["Cold", "wind", "snow"]);
    }

    #[test]
    fn test_sequential_config_produces_same_results() {
        let rows = ["abcd", "efgh", "ijkl", "mnop"];
        let words = ["abcd", "aeim", "gh", "zz", "k"];

        let parallel = engine(&rows).find(words);
        let sequential = SearchEngine::with_config(
            GridIndex::new(&rows).unwrap(),
            SearchConfig::default().with_parallel(false),
        )
        .unwrap()
        .find(words);

        assert_eq!(parallel.words, sequential.words);
        assert_eq!(
            parallel.total_words_searched,
            sequential.total_words_searched
        );
    }
}
