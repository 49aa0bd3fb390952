//! Engine error type.
//!
//! The engine has exactly one failure kind: an argument that does not
//! describe a playable game. Everything else (full boards, stuck boards,
//! boards that already hold the win tile) is valid input.

use thiserror::Error;

use crate::core::{MAX_BOARD_SIZE, MAX_TILE};

/// Result alias used across the engine.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors surfaced by the engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// The caller passed something that is not a valid board, direction,
    /// size or configuration value.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),
}

impl EngineError {
    /// The underlying cause.
    #[must_use]
    pub fn cause(&self) -> &ArgumentError {
        match self {
            EngineError::InvalidArgument(cause) => cause,
        }
    }
}

/// Why an argument was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgumentError {
    #[error("board must be a non-empty square matrix")]
    EmptyBoard,

    #[error("board must be a non-empty square matrix (row {row} has {len} cells, expected {expected})")]
    NotSquare { row: usize, len: usize, expected: usize },

    #[error("unknown direction {0:?}, expected one of UP, DOWN, LEFT, RIGHT")]
    UnknownDirection(String),

    #[error("board size must be between 1 and {}, got {0}", MAX_BOARD_SIZE)]
    InvalidSize(usize),

    #[error("tile {value} at row {row}, column {col} exceeds the largest tile {}", MAX_TILE)]
    TileTooLarge { row: usize, col: usize, value: u64 },

    #[error("win tile must be a positive integer, got {0}")]
    InvalidWinTile(u64),

    #[error("four-tile probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),
}
