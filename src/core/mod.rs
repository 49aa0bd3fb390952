//! Core engine types: board, cells, directions, RNG, configuration.

pub mod board;
pub mod config;
pub mod direction;
pub mod rng;

pub use board::{Board, Cell, Tile};
pub use config::{
    GameConfig, DEFAULT_SIZE, DEFAULT_WIN_TILE, FOUR_TILE_PROBABILITY, MAX_BOARD_SIZE, MAX_TILE,
};
pub use direction::Direction;
pub use rng::{GameRng, GameRngState, TileRng};
