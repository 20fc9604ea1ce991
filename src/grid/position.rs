//! Grid coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A column/row coordinate on the grid.
///
/// `x` is the column (advances left to right), `y` is the row (advances top
/// to bottom). The origin `[0,0]` is the top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Column index.
    pub x: usize,
    /// Row index.
    pub y: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}
