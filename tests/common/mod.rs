//! Shared fixtures for integration tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wordgrid::search::Direction;

const FILL_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Generate `rows` random rows of `len` lowercase characters each.
pub fn random_rows(rows: usize, len: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..rows).map(|_| random_string(&mut rng, len)).collect()
}

fn random_string(rng: &mut StdRng, len: usize) -> String {
    (0..len)
        .map(|_| FILL_CHARS[rng.random_range(0..FILL_CHARS.len())] as char)
        .collect()
}

/// A planted occurrence of a word, for round-trip assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
}

/// Builds word-search grids with known planted words.
///
/// Words are placed along the two searchable axes; cells left unused are
/// filled with random letters at build time. Overlaps are allowed only where
/// both words put the same letter in a cell.
pub struct GridBuilder {
    size: usize,
    cells: Vec<Vec<Option<char>>>,
    rng: StdRng,
}

impl GridBuilder {
    pub fn new(size: usize, seed: u64) -> Self {
        GridBuilder {
            size,
            cells: vec![vec![None; size]; size],
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Place `word` with its first letter at `(x, y)`, advancing along
    /// `direction`. Returns false if the word would leave the grid or
    /// conflict with an already-placed letter.
    pub fn place(&mut self, word: &str, x: usize, y: usize, direction: Direction) -> bool {
        let chars: Vec<char> = word.chars().collect();

        let fits = match direction {
            Direction::LeftToRight => x + chars.len() <= self.size && y < self.size,
            Direction::TopToBottom => y + chars.len() <= self.size && x < self.size,
        };
        if !fits {
            return false;
        }

        let coords = |i: usize| match direction {
            Direction::LeftToRight => (x + i, y),
            Direction::TopToBottom => (x, y + i),
        };

        for (i, &c) in chars.iter().enumerate() {
            let (cx, cy) = coords(i);
            if let Some(existing) = self.cells[cy][cx] {
                if existing != c {
                    return false;
                }
            }
        }

        for (i, &c) in chars.iter().enumerate() {
            let (cx, cy) = coords(i);
            self.cells[cy][cx] = Some(c);
        }
        true
    }

    /// Place `word` at random spots until `times` distinct placements
    /// succeed, returning them.
    ///
    /// Panics when the grid is too crowded to take the word, so a fixture
    /// mistake fails loudly instead of weakening assertions.
    pub fn scatter(&mut self, word: &str, times: usize) -> Vec<Placement> {
        let mut placements: Vec<Placement> = Vec::with_capacity(times);
        let mut attempts = 0;

        while placements.len() < times {
            attempts += 1;
            assert!(
                attempts < 20_000,
                "could not scatter {word:?} {times} times into a {0}x{0} grid",
                self.size
            );

            let direction = if self.rng.random_bool(0.5) {
                Direction::LeftToRight
            } else {
                Direction::TopToBottom
            };
            let x = self.rng.random_range(0..self.size);
            let y = self.rng.random_range(0..self.size);
            let placement = Placement { x, y, direction };

            if placements.contains(&placement) {
                continue;
            }
            if self.place(word, x, y, direction) {
                placements.push(placement);
            }
        }

        placements
    }

    /// Fill the remaining cells with random letters and return the rows.
    pub fn build(mut self) -> Vec<String> {
        let mut rows = Vec::with_capacity(self.size);
        for y in 0..self.size {
            let mut row = String::with_capacity(self.size);
            for x in 0..self.size {
                let c = match self.cells[y][x] {
                    Some(c) => c,
                    None => FILL_CHARS[self.rng.random_range(0..FILL_CHARS.len())] as char,
                };
                row.push(c);
            }
            rows.push(row);
        }
        rows
    }
}
