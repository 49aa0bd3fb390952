//! Request and response bodies.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Tile};
use crate::game::GameState;
use crate::rules::{GameProgress, Score};

/// Body of `POST /game/new`.
///
/// Signed integers so out-of-range values reach validation instead of
/// failing deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct NewGameSettings {
    pub size: Option<i64>,
    pub win_tile: Option<i64>,
}

/// Full game state as returned to clients.
#[derive(Debug, Serialize, Deserialize)]
pub struct GameStateData {
    pub board: Board,
    pub score: Score,
    pub progress: GameProgress,
    pub win_tile: Tile,
    pub board_size: usize,
}

impl From<&GameState> for GameStateData {
    fn from(state: &GameState) -> Self {
        Self {
            board: state.board.clone(),
            score: state.score,
            progress: state.progress(),
            win_tile: state.win_tile(),
            board_size: state.board.size(),
        }
    }
}

/// Body of `POST /game/move`.
///
/// Board and direction arrive untyped so malformed values are reported
/// through the engine's own errors.
#[derive(Debug, Deserialize)]
pub struct MoveRequestData {
    pub board: Vec<Vec<Tile>>,
    pub score: Score,
    pub direction: String,
    pub win_tile: i64,
}

/// Response to `POST /game/move`.
#[derive(Debug, Serialize, Deserialize)]
pub struct MoveResponseData {
    #[serde(flatten)]
    pub state: GameStateData,
    pub move_was_effective: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}
