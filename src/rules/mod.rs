//! Game rules.
//!
//! - `line`: the compress / merge / compress reducer for a single row
//! - `engine`: applies the reducer to a whole board for any direction
//! - `queries`: empty cells, move possibility, random tile placement
//! - `status`: win / loss classification
//!
//! Everything here is a pure function of its inputs except tile placement,
//! which takes its randomness from an injected [`TileRng`](crate::core::TileRng).

pub mod engine;
pub mod line;
pub mod queries;
pub mod status;

pub use engine::{board_size, initialize_board, process_move, MoveOutcome};
pub use line::{compress, merge, merged_value, reduce_line, LineOutcome, Score};
pub use queries::{
    add_random_tile, empty_cells, is_any_move_possible, is_move_possible, legal_moves, spawn_tile,
    Spawn,
};
pub use status::{determine_status, has_win_tile, GameProgress};
