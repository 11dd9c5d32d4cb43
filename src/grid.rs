//! Board coordinates and their mapping onto linear cell indices.

use core::fmt;

use crate::common::GameError;
use crate::config::BOARD_SIZE;

/// A board position: column then row, zero-indexed from the north-west
/// corner. Components are signed so neighbor arithmetic can step off the
/// board and be rejected by [`cell_index`] instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub col: i32,
    pub row: i32,
}

impl Coord {
    /// Create a coordinate from column and row.
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// The coordinate shifted by (`dc`, `dr`), possibly off the board.
    pub const fn offset(self, dc: i32, dr: i32) -> Self {
        Self {
            col: self.col + dc,
            row: self.row + dr,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((col, row): (i32, i32)) -> Self {
        Self { col, row }
    }
}

/// Returns `true` when `coord` lies on the board.
pub fn in_bounds(coord: Coord) -> bool {
    let n = BOARD_SIZE as i32;
    coord.col >= 0 && coord.col < n && coord.row >= 0 && coord.row < n
}

/// Convert a coordinate to its linear cell index (row-major).
pub fn cell_index(coord: Coord) -> Result<u32, GameError> {
    if !in_bounds(coord) {
        return Err(GameError::OutOfBounds);
    }
    Ok(coord.row as u32 * BOARD_SIZE as u32 + coord.col as u32)
}

/// Convert a linear cell index back to a coordinate.
pub fn coord_at(index: u32) -> Coord {
    let n = BOARD_SIZE as u32;
    Coord {
        col: (index % n) as i32,
        row: (index / n) as i32,
    }
}
