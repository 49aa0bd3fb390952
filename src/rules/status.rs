//! Game progress classification.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::queries::is_any_move_possible;
use crate::core::{Board, Tile};

/// Where a game stands. Computed from the board, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameProgress {
    #[serde(rename = "IN_PROGRESS")]
    InProgress,
    #[serde(rename = "GAME_WON")]
    Won,
    #[serde(rename = "GAME_OVER")]
    Lost,
}

impl GameProgress {
    /// True for `Won` and `Lost`.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameProgress::InProgress)
    }
}

impl fmt::Display for GameProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameProgress::InProgress => "IN_PROGRESS",
            GameProgress::Won => "GAME_WON",
            GameProgress::Lost => "GAME_OVER",
        })
    }
}

/// Whether any cell holds exactly `win_tile`.
#[must_use]
pub fn has_win_tile(board: &Board, win_tile: Tile) -> bool {
    board.cells().any(|(_, tile)| tile == win_tile)
}

/// Classify a board.
///
/// A win takes priority: a full, stuck board that holds the win tile is
/// `Won`. Otherwise the game is `Lost` only when the board is full and no
/// direction moves anything.
#[must_use]
pub fn determine_status(board: &Board, win_tile: Tile) -> GameProgress {
    if has_win_tile(board, win_tile) {
        return GameProgress::Won;
    }
    if board.is_full() && !is_any_move_possible(board) {
        return GameProgress::Lost;
    }
    GameProgress::InProgress
}
