//! Board representation and adjacency queries.
//!
//! A board is an immutable n x n matrix of lowercase letters. Adjacency is
//! 8-directional (orthogonal plus diagonal), clipped at the board edges.

use std::error::Error;
use std::fmt;

use nanorand::{Rng, WyRand};

/// A cell position on the board, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Errors from constructing a board with a caller-supplied grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The grid does not have exactly `expected` rows.
    WrongRowCount { expected: usize, actual: usize },
    /// Row `row` does not have exactly `expected` columns.
    WrongRowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::WrongRowCount { expected, actual } => {
                write!(f, "expected {} rows, got {}", expected, actual)
            }
            BoardError::WrongRowLength {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "row {} has {} columns, expected {}",
                    row, actual, expected
                )
            }
        }
    }
}

impl Error for BoardError {}

/// An n x n Boggle board.
///
/// The size and cell contents are fixed at construction; no mutating
/// accessors exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    grid: Vec<Vec<char>>,
}

impl Board {
    /// Build a board from a caller-supplied grid, validating that it is
    /// exactly `size` rows of `size` columns each.
    pub fn with_grid(size: usize, grid: Vec<Vec<char>>) -> Result<Self, BoardError> {
        if grid.len() != size {
            return Err(BoardError::WrongRowCount {
                expected: size,
                actual: grid.len(),
            });
        }
        for (row, cells) in grid.iter().enumerate() {
            if cells.len() != size {
                return Err(BoardError::WrongRowLength {
                    row,
                    expected: size,
                    actual: cells.len(),
                });
            }
        }
        Ok(Self { size, grid })
    }

    /// Build a board filled with uniformly random lowercase letters.
    pub fn random(size: usize) -> Self {
        Self::fill(size, &mut WyRand::new())
    }

    /// Build a random board from a fixed seed, for reproducible boards.
    pub fn random_seeded(size: usize, seed: u64) -> Self {
        Self::fill(size, &mut WyRand::new_seed(seed))
    }

    fn fill(size: usize, rng: &mut WyRand) -> Self {
        let grid = (0..size)
            .map(|_| {
                (0..size)
                    .map(|_| (b'a' + rng.generate_range(0..26u8)) as char)
                    .collect()
            })
            .collect();
        Self { size, grid }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The letter at `pos`. Panics if `pos` is out of bounds.
    pub fn letter(&self, pos: Pos) -> char {
        self.grid[pos.row][pos.col]
    }

    /// Whether both coordinates lie within the board.
    pub fn is_valid(&self, pos: Pos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// All valid cells adjacent to `pos`, excluding `pos` itself.
    ///
    /// Iteration runs row offset then column offset, so the order is
    /// deterministic for a fixed board and position. Returns an empty vec
    /// on degenerate board sizes.
    pub fn neighbors(&self, pos: Pos) -> Vec<Pos> {
        let mut result = Vec::with_capacity(8);
        for dr in -1i64..=1 {
            for dc in -1i64..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let row = pos.row as i64 + dr;
                let col = pos.col as i64 + dc;
                if row < 0 || col < 0 {
                    continue;
                }
                let next = Pos::new(row as usize, col as usize);
                if self.is_valid(next) {
                    result.push(next);
                }
            }
        }
        result
    }

    /// Every cell position in row-major order.
    pub fn cells(&self) -> Vec<Pos> {
        (0..self.size)
            .flat_map(|row| (0..self.size).map(move |col| Pos::new(row, col)))
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            for (i, c) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
