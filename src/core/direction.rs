//! Move directions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::board::Cell;
use crate::error::{ArgumentError, EngineError};

/// The four directions a move can slide tiles in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Every direction, in the order moves are tried.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The neighbouring cell a tile at `cell` would travel into, if it is
    /// inside a board of the given size.
    #[must_use]
    pub fn neighbour(self, cell: Cell, size: usize) -> Option<Cell> {
        let Cell { row, col } = cell;
        match self {
            Direction::Up => row.checked_sub(1).map(|r| Cell::new(r, col)),
            Direction::Down => (row + 1 < size).then(|| Cell::new(row + 1, col)),
            Direction::Left => col.checked_sub(1).map(|c| Cell::new(row, c)),
            Direction::Right => (col + 1 < size).then(|| Cell::new(row, col + 1)),
        }
    }

    /// Upper-case wire name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the direction names in any case and the W/A/S/D keys.
impl FromStr for Direction {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "w" => Ok(Direction::Up),
            "down" | "s" => Ok(Direction::Down),
            "left" | "a" => Ok(Direction::Left),
            "right" | "d" => Ok(Direction::Right),
            _ => Err(ArgumentError::UnknownDirection(s.to_string()).into()),
        }
    }
}
