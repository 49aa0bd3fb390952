//! The play loop as a value type.
//!
//! `GameState::apply` composes one full turn (move, tile spawn if the move
//! did anything, status) for callers such as the interactive driver and the
//! HTTP service, which only shuttle input and output around it.

mod state;

pub use state::{GameState, Turn};
