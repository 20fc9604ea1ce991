//! Top-N selection over per-word match results.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::search::results::WordMatch;

/// A collector that keeps the N words with the most matches.
///
/// Backed by a min-heap whose top is the current worst entry, so collecting
/// W words costs O(W log N). Ties on match count are broken by arrival
/// order: the word encountered earlier in the stream ranks higher. Feeding
/// the collector in stream order therefore makes the final ranking
/// deterministic regardless of how the per-word searches were scheduled.
#[derive(Debug)]
pub struct TopWordsCollector {
    limit: usize,
    // Min-heap: the worst-ranked entry is at the top.
    entries: BinaryHeap<RankedWord>,
}

#[derive(Debug)]
struct RankedWord {
    ordinal: usize,
    word_match: WordMatch,
}

impl PartialEq for RankedWord {
    fn eq(&self, other: &Self) -> bool {
        self.word_match.count() == other.word_match.count() && self.ordinal == other.ordinal
    }
}

impl Eq for RankedWord {}

impl PartialOrd for RankedWord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankedWord {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: fewer matches rank "greater" so the heap top is the
        // worst entry; among equal counts the later arrival is worse.
        other
            .word_match
            .count()
            .cmp(&self.word_match.count())
            .then_with(|| self.ordinal.cmp(&other.ordinal))
    }
}

impl TopWordsCollector {
    /// Create a collector keeping at most `limit` words.
    pub fn new(limit: usize) -> Self {
        TopWordsCollector {
            limit,
            entries: BinaryHeap::with_capacity(limit + 1),
        }
    }

    /// Offer one word's matches to the collection.
    ///
    /// `ordinal` is the word's arrival position in the stream and is the
    /// tie-break key for equal match counts.
    pub fn collect(&mut self, ordinal: usize, word_match: WordMatch) {
        if self.limit == 0 {
            return;
        }

        let entry = RankedWord {
            ordinal,
            word_match,
        };

        if self.entries.len() < self.limit {
            self.entries.push(entry);
        } else if let Some(worst) = self.entries.peek() {
            if entry < *worst {
                self.entries.pop();
                self.entries.push(entry);
            }
        }
    }

    /// The collected words, best first.
    pub fn into_ranked(self) -> Vec<WordMatch> {
        let mut entries = self.entries.into_vec();
        // Ascending in the reversed ordering puts the best entry first.
        entries.sort();
        entries.into_iter().map(|e| e.word_match).collect()
    }
}
