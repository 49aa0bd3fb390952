//! The square tile grid.
//!
//! A `Board` is a value: operations never mutate a board in place, they
//! build a new one. The square, non-empty shape and the tile ceiling are
//! checked once at construction so the rest of the engine can index freely.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::config::{MAX_BOARD_SIZE, MAX_TILE};
use crate::error::{ArgumentError, Result};

/// A tile value. Zero is an empty cell, anything else is a power of two.
pub type Tile = u64;

/// A cell coordinate, `(row, col)`, 0-indexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Create a new cell coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An N x N grid of tiles.
///
/// Serializes as a list of rows, the same shape callers send over the wire.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Tile>>", into = "Vec<Vec<Tile>>")]
pub struct Board {
    rows: Vec<Vec<Tile>>,
}

impl Board {
    /// Create an all-empty board of the given size.
    pub fn empty(size: usize) -> Result<Self> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(ArgumentError::InvalidSize(size).into());
        }
        Ok(Self {
            rows: vec![vec![0; size]; size],
        })
    }

    /// Build a board from rows, checking that they form a non-empty square
    /// no larger than [`MAX_BOARD_SIZE`] and that no tile exceeds [`MAX_TILE`].
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self> {
        let expected = rows.len();
        if expected == 0 {
            return Err(ArgumentError::EmptyBoard.into());
        }
        if expected > MAX_BOARD_SIZE {
            return Err(ArgumentError::InvalidSize(expected).into());
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(ArgumentError::NotSquare {
                row,
                len: r.len(),
                expected,
            }
            .into());
        }
        let board = Self { rows };
        if let Some((cell, value)) = board.cells().find(|&(_, t)| t > MAX_TILE) {
            return Err(ArgumentError::TileTooLarge {
                row: cell.row,
                col: cell.col,
                value,
            }
            .into());
        }
        Ok(board)
    }

    /// Rows already known to be square. Used by transforms that preserve shape.
    pub(crate) fn from_square_rows(rows: Vec<Vec<Tile>>) -> Self {
        debug_assert!(!rows.is_empty() && rows.iter().all(|r| r.len() == rows.len()));
        Self { rows }
    }

    /// Board dimension N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Tile at a cell.
    ///
    /// # Panics
    /// Panics if the cell is out of bounds.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Tile {
        self.rows[cell.row][cell.col]
    }

    /// Tile at a cell, or `None` when out of bounds.
    #[must_use]
    pub fn try_get(&self, cell: Cell) -> Option<Tile> {
        self.rows.get(cell.row).and_then(|r| r.get(cell.col)).copied()
    }

    /// A copy of this board with one cell replaced.
    ///
    /// # Panics
    /// Panics if the cell is out of bounds.
    #[must_use]
    pub fn with_tile(&self, cell: Cell, value: Tile) -> Self {
        let mut next = self.clone();
        next.rows[cell.row][cell.col] = value;
        next
    }

    /// All rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.rows
    }

    /// Consume the board and return its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<Tile>> {
        self.rows
    }

    /// Iterate `(cell, tile)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, Tile)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &tile)| (Cell::new(r, c), tile))
        })
    }

    /// Sum of all tile values, saturating at `u64::MAX`.
    #[must_use]
    pub fn tile_sum(&self) -> u64 {
        self.rows
            .iter()
            .flatten()
            .fold(0u64, |acc, &t| acc.saturating_add(t))
    }

    /// Largest tile on the board (0 for an empty board).
    #[must_use]
    pub fn max_tile(&self) -> Tile {
        self.rows.iter().flatten().copied().max().unwrap_or(0)
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.rows.iter().flatten().all(|&t| t != 0)
    }
}

impl TryFrom<Vec<Vec<Tile>>> for Board {
    type Error = crate::error::EngineError;

    fn try_from(rows: Vec<Vec<Tile>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<Board> for Vec<Vec<Tile>> {
    fn from(board: Board) -> Self {
        board.rows
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let line: Vec<String> = row.iter().map(Tile::to_string).collect();
            writeln!(f, "{}", line.join("\t"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_empty_board() {
        let board = Board::empty(4).unwrap();
        assert_eq!(board.size(), 4);
        assert_eq!(board.tile_sum(), 0);
        assert!(!board.is_full());
        assert_eq!(board.cells().count(), 16);
    }

    #[test]
    fn test_empty_board_zero_size() {
        assert_eq!(
            Board::empty(0),
            Err(EngineError::InvalidArgument(ArgumentError::InvalidSize(0)))
        );
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Board::from_rows(vec![vec![0, 0], vec![0]]).unwrap_err();
        assert_eq!(
            err.cause(),
            &ArgumentError::NotSquare { row: 1, len: 1, expected: 2 }
        );
    }

    #[test]
    fn test_from_rows_rejects_rectangular() {
        assert!(Board::from_rows(vec![vec![0, 0, 0], vec![0, 0, 0]]).is_err());
        assert!(Board::from_rows(vec![]).is_err());
    }

    #[test]
    fn test_from_rows_rejects_oversized() {
        let rows = vec![vec![0; MAX_BOARD_SIZE + 1]; MAX_BOARD_SIZE + 1];
        assert_eq!(
            Board::from_rows(rows).unwrap_err().cause(),
            &ArgumentError::InvalidSize(MAX_BOARD_SIZE + 1)
        );
        assert!(Board::empty(MAX_BOARD_SIZE + 1).is_err());
        assert_eq!(Board::empty(MAX_BOARD_SIZE).unwrap().size(), MAX_BOARD_SIZE);
    }

    #[test]
    fn test_from_rows_rejects_huge_tiles() {
        let err = Board::from_rows(vec![vec![0, 0], vec![0, 1 << 63]]).unwrap_err();
        assert_eq!(
            err.cause(),
            &ArgumentError::TileTooLarge { row: 1, col: 1, value: 1 << 63 }
        );
        assert!(Board::from_rows(vec![vec![MAX_TILE, MAX_TILE], vec![0, 0]]).is_ok());

        let json: std::result::Result<Board, _> =
            serde_json::from_str("[[18446744073709551615,0],[0,0]]");
        assert!(json.is_err());
    }

    #[test]
    fn test_tile_sum_saturates() {
        let board = Board::empty(2)
            .unwrap()
            .with_tile(Cell::new(0, 0), u64::MAX)
            .with_tile(Cell::new(1, 1), 2);
        assert_eq!(board.tile_sum(), u64::MAX);
    }

    #[test]
    fn test_with_tile_leaves_original() {
        let board = Board::empty(3).unwrap();
        let next = board.with_tile(Cell::new(1, 2), 4);

        assert_eq!(board.get(Cell::new(1, 2)), 0);
        assert_eq!(next.get(Cell::new(1, 2)), 4);
        assert_eq!(next.max_tile(), 4);
    }

    #[test]
    fn test_cells_row_major() {
        let board = Board::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let cells: Vec<_> = board.cells().collect();
        assert_eq!(
            cells,
            vec![
                (Cell::new(0, 0), 1),
                (Cell::new(0, 1), 2),
                (Cell::new(1, 0), 3),
                (Cell::new(1, 1), 4),
            ]
        );
        assert!(board.is_full());
        assert_eq!(board.try_get(Cell::new(2, 0)), None);
    }

    #[test]
    fn test_display() {
        let board = Board::from_rows(vec![vec![2, 0], vec![0, 4]]).unwrap();
        assert_eq!(board.to_string(), "2\t0\n0\t4\n");
    }

    #[test]
    fn test_serde_shape() {
        let board = Board::from_rows(vec![vec![2, 0], vec![0, 4]]).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, "[[2,0],[0,4]]");

        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);

        let ragged: std::result::Result<Board, _> = serde_json::from_str("[[2,0],[0]]");
        assert!(ragged.is_err());
    }
}
