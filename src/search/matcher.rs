//! Directional word matching along the two supported grid axes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid::{Grid, Position};

/// A scan axis for matching.
///
/// The set is closed: matching never runs diagonally or in reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// The column advances, the row stays fixed.
    LeftToRight,
    /// The row advances, the column stays fixed.
    TopToBottom,
}

impl Direction {
    /// All supported directions, in the order they are searched.
    pub const ALL: [Direction; 2] = [Direction::LeftToRight, Direction::TopToBottom];

    /// The coordinate one step further along this direction.
    pub fn advance(self, pos: Position) -> Position {
        match self {
            Direction::LeftToRight => Position::new(pos.x + 1, pos.y),
            Direction::TopToBottom => Position::new(pos.x, pos.y + 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::LeftToRight => write!(f, "left to right"),
            Direction::TopToBottom => write!(f, "top to bottom"),
        }
    }
}

/// Tests whether a word lies on a grid along a fixed direction.
#[derive(Debug, Clone, Copy)]
pub struct DirectionalMatcher<'a> {
    grid: &'a Grid,
}

impl<'a> DirectionalMatcher<'a> {
    /// Create a matcher over `grid`.
    pub fn new(grid: &'a Grid) -> Self {
        DirectionalMatcher { grid }
    }

    /// Match `word` starting at `start` along `direction`.
    ///
    /// The character index and the coordinate advance in lockstep; the match
    /// fails as soon as a coordinate leaves the grid or a cell differs
    /// (case-insensitively) from the expected character. On success the end
    /// coordinate is returned; a single-character word matches trivially with
    /// end == start. Matching never wraps around grid edges and never changes
    /// direction mid-word.
    ///
    /// The first character is checked against the start cell as well, so the
    /// matcher is correct for direct callers, not only for candidates drawn
    /// from the position index. An empty `word` never matches.
    pub fn match_from(
        &self,
        word: &[char],
        start: Position,
        direction: Direction,
    ) -> Option<Position> {
        let (&first, rest) = word.split_first()?;
        if !self.grid.matches_at(start, first) {
            return None;
        }

        let mut pos = start;
        for &expected in rest {
            let next = direction.advance(pos);
            if !self.grid.matches_at(next, expected) {
                return None;
            }
            pos = next;
        }

        Some(pos)
    }
}
