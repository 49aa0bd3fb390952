//! # rust-2048
//!
//! A stateless rules engine for the 2048 tile-merging puzzle on an N x N board.
//!
//! ## Design Principles
//!
//! 1. **Boards are values**: every operation takes a board and returns a new
//!    one. Nothing is mutated in place and no session is kept.
//!
//! 2. **One canonical slide**: all four directions run the same slide-left
//!    line reducer on a transposed and/or mirrored board.
//!
//! 3. **Injected randomness**: tile placement is the only random step and
//!    draws from a caller-supplied [`TileRng`], so games replay exactly
//!    from a seed.
//!
//! ## Modules
//!
//! - `core`: board, cells, directions, RNG, configuration
//! - `grid`: transpose / reverse transforms
//! - `rules`: line reducer, move engine, board queries, status
//! - `game`: one full turn (move, spawn, status) as a value type
//! - `service`: HTTP JSON front end (feature `server`)
//!
//! ```
//! use rust_2048::{process_move, Board, Direction};
//!
//! let board = Board::from_rows(vec![vec![2, 2], vec![0, 0]]).unwrap();
//! let outcome = process_move(&board, Direction::Left);
//! assert_eq!(outcome.board.rows()[0], vec![4, 0]);
//! assert_eq!(outcome.score_delta, 4);
//! assert!(outcome.changed);
//! ```

pub mod core;
pub mod error;
pub mod game;
pub mod grid;
pub mod logging;
pub mod rules;

#[cfg(feature = "server")]
pub mod service;

// Re-export commonly used types
pub use crate::core::{Board, Cell, Direction, GameConfig, GameRng, GameRngState, Tile, TileRng};

pub use crate::error::{ArgumentError, EngineError, Result};

pub use crate::grid::{reverse_rows, transpose};

pub use crate::rules::{
    add_random_tile, board_size, determine_status, empty_cells, initialize_board,
    is_any_move_possible, is_move_possible, process_move, GameProgress, MoveOutcome, Score,
};

pub use crate::game::{GameState, Turn};
