//! Per-game configuration.
//!
//! The win tile and spawn odds are properties of a game instance, not of
//! the board, so they travel alongside it in a `GameConfig`.

use serde::{Deserialize, Serialize};

use super::board::Tile;
use crate::error::{ArgumentError, Result};

/// Default board dimension.
pub const DEFAULT_SIZE: usize = 4;

/// Default tile value that wins the game.
pub const DEFAULT_WIN_TILE: Tile = 2048;

/// Probability that a spawned tile is a 4 rather than a 2.
pub const FOUR_TILE_PROBABILITY: f64 = 0.1;

/// Largest board dimension accepted anywhere in the engine.
pub const MAX_BOARD_SIZE: usize = 64;

/// Largest tile a caller may place on a board. Merges may still double it once.
pub const MAX_TILE: Tile = 1 << 62;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board dimension N.
    pub size: usize,

    /// Reaching a tile of this value wins.
    pub win_tile: Tile,

    /// Chance that a new tile is a 4.
    pub four_probability: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            win_tile: DEFAULT_WIN_TILE,
            four_probability: FOUR_TILE_PROBABILITY,
        }
    }
}

impl GameConfig {
    /// Create a configuration for a board of the given size.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Set the win tile.
    #[must_use]
    pub fn with_win_tile(mut self, win_tile: Tile) -> Self {
        self.win_tile = win_tile;
        self
    }

    /// Set the chance that a new tile is a 4.
    #[must_use]
    pub fn with_four_probability(mut self, probability: f64) -> Self {
        self.four_probability = probability;
        self
    }

    /// Check every field describes a playable game.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 || self.size > MAX_BOARD_SIZE {
            return Err(ArgumentError::InvalidSize(self.size).into());
        }
        if self.win_tile == 0 {
            return Err(ArgumentError::InvalidWinTile(self.win_tile).into());
        }
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(ArgumentError::InvalidProbability(self.four_probability).into());
        }
        Ok(())
    }
}
