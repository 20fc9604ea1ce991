//! Grid validation and character position indexing.
//!
//! [`GridIndex`] is built once from an ordered sequence of rows. Validation
//! runs to completion before any indexing, so a construction failure never
//! leaves partial state behind. After construction the structure is immutable
//! and safe to share across concurrent searches.

use ahash::AHashMap;

use crate::error::{Result, WordGridError};
use crate::grid::position::Position;
use crate::grid::{MAX_GRID_ROWS, MAX_ROW_LEN, fold_char};

/// An immutable character board.
///
/// Cells keep the casing they were supplied with; [`Grid::matches_at`]
/// compares case-insensitively.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Vec<char>>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The character stored at `pos`, or `None` outside the grid.
    pub fn char_at(&self, pos: Position) -> Option<char> {
        self.cells.get(pos.y).and_then(|row| row.get(pos.x)).copied()
    }

    /// Whether the cell at `pos` equals `c`, ignoring case.
    ///
    /// Returns `false` for coordinates outside the grid.
    pub fn matches_at(&self, pos: Position, c: char) -> bool {
        match self.char_at(pos) {
            Some(cell) => fold_char(cell) == fold_char(c),
            None => false,
        }
    }
}

/// A validated grid together with its character position index.
///
/// The index maps every case-folded character to the positions where it
/// occurs, in row-major scan order. It is the source of candidate start
/// coordinates for the search phase.
#[derive(Debug, Clone)]
pub struct GridIndex {
    grid: Grid,
    positions: AHashMap<char, Vec<Position>>,
}

impl GridIndex {
    /// Validate `rows` and build the grid and its position index.
    ///
    /// Validation failures are reported in order: an empty sequence, too many
    /// rows, a row longer than the limit, and rows of differing lengths. All
    /// checks run before any indexing work.
    pub fn new<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        validate(rows)?;

        let mut cells = Vec::with_capacity(rows.len());
        let mut positions: AHashMap<char, Vec<Position>> = AHashMap::new();

        for (y, row) in rows.iter().enumerate() {
            let row_cells: Vec<char> = row.as_ref().chars().collect();
            for (x, &c) in row_cells.iter().enumerate() {
                positions
                    .entry(fold_char(c))
                    .or_default()
                    .push(Position::new(x, y));
            }
            cells.push(row_cells);
        }

        let width = cells[0].len();
        let height = cells.len();

        Ok(GridIndex {
            grid: Grid {
                cells,
                width,
                height,
            },
            positions,
        })
    }

    /// The underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Every position where `c` occurs, case-insensitively, in row-major
    /// scan order. Empty when the character is absent from the grid.
    pub fn positions_of(&self, c: char) -> &[Position] {
        self.positions
            .get(&fold_char(c))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

fn validate<S: AsRef<str>>(rows: &[S]) -> Result<()> {
    if rows.is_empty() {
        return Err(WordGridError::EmptyMatrix);
    }

    if rows.len() > MAX_GRID_ROWS {
        return Err(WordGridError::MatrixTooLarge { rows: rows.len() });
    }

    for (row, line) in rows.iter().enumerate() {
        let len = line.as_ref().chars().count();
        if len > MAX_ROW_LEN {
            return Err(WordGridError::RowTooLong { row, len });
        }
    }

    let expected = rows[0].as_ref().chars().count();
    for (row, line) in rows.iter().enumerate().skip(1) {
        let len = line.as_ref().chars().count();
        if len != expected {
            return Err(WordGridError::NonUniformRows { row, len, expected });
        }
    }

    Ok(())
}
