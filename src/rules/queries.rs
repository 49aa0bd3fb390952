//! Read-only board queries and random tile placement.

use tracing::debug;

use super::line::merged_value;
use crate::core::config::FOUR_TILE_PROBABILITY;
use crate::core::{Board, Cell, Direction, Tile, TileRng};
use crate::error::{ArgumentError, Result};

/// A tile placed by [`spawn_tile`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Spawn {
    pub board: Board,
    pub cell: Cell,
    pub value: Tile,
}

/// Every empty cell, in row-major order.
#[must_use]
pub fn empty_cells(board: &Board) -> Vec<Cell> {
    board
        .cells()
        .filter(|&(_, tile)| tile == 0)
        .map(|(cell, _)| cell)
        .collect()
}

/// Place a 2 (or, with `four_probability`, a 4) on a uniformly chosen empty cell.
///
/// Returns `Ok(None)` when the board is full, and an error when
/// `four_probability` is not in `[0, 1]`.
pub fn spawn_tile<R: TileRng + ?Sized>(
    board: &Board,
    rng: &mut R,
    four_probability: f64,
) -> Result<Option<Spawn>> {
    if !(0.0..=1.0).contains(&four_probability) {
        return Err(ArgumentError::InvalidProbability(four_probability).into());
    }
    Ok(place_tile(board, rng, four_probability))
}

/// [`spawn_tile`] for a probability already known to lie in `[0, 1]`.
pub(crate) fn place_tile<R: TileRng + ?Sized>(
    board: &Board,
    rng: &mut R,
    four_probability: f64,
) -> Option<Spawn> {
    let empty = empty_cells(board);
    if empty.is_empty() {
        return None;
    }

    let cell = empty[rng.pick_index(empty.len())];
    let value = if rng.chance(four_probability) { 4 } else { 2 };
    debug!(%cell, value, "spawned tile");

    Some(Spawn {
        board: board.with_tile(cell, value),
        cell,
        value,
    })
}

/// Add a random tile with the standard 90/10 odds of a 2 or a 4.
///
/// On a full board returns a copy of the input and `false`.
pub fn add_random_tile<R: TileRng + ?Sized>(board: &Board, rng: &mut R) -> (Board, bool) {
    match place_tile(board, rng, FOUR_TILE_PROBABILITY) {
        Some(spawn) => (spawn.board, true),
        None => (board.clone(), false),
    }
}

/// Whether a move towards `direction` would change the board.
///
/// True when some tile has an in-bounds neighbour in that direction that is
/// empty or that it can merge with. Agrees exactly with
/// [`process_move`](super::process_move)'s `changed` flag.
#[must_use]
pub fn is_move_possible(board: &Board, direction: Direction) -> bool {
    let size = board.size();
    board.cells().any(|(cell, tile)| {
        tile != 0
            && direction
                .neighbour(cell, size)
                .map(|next| {
                    let other = board.get(next);
                    other == 0 || merged_value(tile, other).is_some()
                })
                .unwrap_or(false)
    })
}

/// Whether any of the four directions is a legal move.
#[must_use]
pub fn is_any_move_possible(board: &Board) -> bool {
    Direction::ALL
        .iter()
        .any(|&direction| is_move_possible(board, direction))
}

/// Directions that would change the board.
#[must_use]
pub fn legal_moves(board: &Board) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&direction| is_move_possible(board, direction))
        .collect()
}
