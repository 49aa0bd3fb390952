//! A game as a value: board, score, and the configuration it is played under.

use serde::Serialize;
use tracing::debug;

use crate::core::{Board, Cell, Direction, GameConfig, Tile, TileRng};
use crate::error::Result;
use crate::rules::queries::place_tile;
use crate::rules::{determine_status, initialize_board, process_move, GameProgress, Score};

/// Snapshot of a game between moves.
///
/// The configuration is only reachable through [`GameState::config`], so a
/// state always plays under the settings that were validated when it was
/// built.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameState {
    pub board: Board,
    pub score: Score,
    config: GameConfig,
}

/// What one call to [`GameState::apply`] did.
#[derive(Clone, Debug, PartialEq)]
pub struct Turn {
    /// The game after the move (and the spawned tile, if any).
    pub state: GameState,
    /// Whether the slide changed the board. No tile is spawned otherwise.
    pub effective: bool,
    /// Points earned by merges in this move.
    pub score_gained: Score,
    /// Where the new tile landed and its value.
    pub spawned: Option<(Cell, Tile)>,
    /// Progress of the resulting board.
    pub progress: GameProgress,
}

impl GameState {
    /// Start a new game: validate the configuration and seed two tiles.
    pub fn new<R: TileRng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let (board, score, _) = initialize_board(config.size, rng)?;
        debug!(size = config.size, win_tile = config.win_tile, "new game");
        Ok(Self {
            board,
            score,
            config,
        })
    }

    /// Resume from a board and score supplied by the caller.
    ///
    /// The configured size is taken from the board.
    pub fn resume(board: Board, score: Score, config: GameConfig) -> Result<Self> {
        let config = GameConfig {
            size: board.size(),
            ..config
        };
        config.validate()?;
        Ok(Self {
            board,
            score,
            config,
        })
    }

    /// The validated configuration this game is played under.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The tile value that wins this game.
    #[must_use]
    pub fn win_tile(&self) -> Tile {
        self.config.win_tile
    }

    /// Progress of the current board.
    #[must_use]
    pub fn progress(&self) -> GameProgress {
        determine_status(&self.board, self.config.win_tile)
    }

    /// Play one move: slide, add a tile if anything moved, classify.
    ///
    /// An ineffective move leaves board and score untouched but still
    /// reports the current progress, so a caller stuck on a dead board
    /// learns the game is lost.
    pub fn apply<R: TileRng + ?Sized>(&self, direction: Direction, rng: &mut R) -> Turn {
        let outcome = process_move(&self.board, direction);

        let mut next = self.clone();
        let mut spawned = None;

        if outcome.changed {
            next.score = next.score.saturating_add(outcome.score_delta);
            next.board = outcome.board;
            if let Some(spawn) = place_tile(&next.board, rng, self.config.four_probability) {
                spawned = Some((spawn.cell, spawn.value));
                next.board = spawn.board;
            }
        }

        let progress = next.progress();
        if progress.is_terminal() {
            debug!(%progress, score = next.score, "game finished");
        }

        Turn {
            state: next,
            effective: outcome.changed,
            score_gained: outcome.score_delta,
            spawned,
            progress,
        }
    }
}
