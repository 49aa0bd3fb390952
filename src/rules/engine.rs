//! The move engine.
//!
//! Orients the board so the move becomes a slide to the left, reduces
//! every row with the same line reducer, and restores the orientation.

use tracing::trace;

use super::line::{reduce_line, Score};
use super::queries::add_random_tile;
use super::status::GameProgress;
use crate::core::{Board, Direction, TileRng};
use crate::error::Result;
use crate::grid::{orient, restore};

/// Result of applying one move to a board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Board after the slide. Content-identical to the input when `changed` is false.
    pub board: Board,
    /// Sum of all merged tile values.
    pub score_delta: Score,
    /// Whether any tile moved or merged.
    pub changed: bool,
}

/// Slide and merge every line of `board` towards `direction`.
///
/// Never fails: empty, full and already-won boards are all valid input.
#[must_use]
pub fn process_move(board: &Board, direction: Direction) -> MoveOutcome {
    let oriented = orient(board, direction);

    let mut rows = Vec::with_capacity(oriented.size());
    let mut score_delta: Score = 0;
    let mut changed = false;

    for row in oriented.rows() {
        let outcome = reduce_line(row);
        score_delta = score_delta.saturating_add(outcome.score);
        changed |= outcome.changed;
        rows.push(outcome.line);
    }

    trace!(%direction, score_delta, changed, "processed move");

    if !changed {
        return MoveOutcome {
            board: board.clone(),
            score_delta: 0,
            changed: false,
        };
    }

    MoveOutcome {
        board: restore(&Board::from_square_rows(rows), direction),
        score_delta,
        changed,
    }
}

/// Create a board of the given size seeded with two random tiles.
///
/// Returns the board, a zero score, and `InProgress`.
pub fn initialize_board<R: TileRng + ?Sized>(
    size: usize,
    rng: &mut R,
) -> Result<(Board, Score, GameProgress)> {
    let board = Board::empty(size)?;
    let (board, _) = add_random_tile(&board, rng);
    let (board, _) = add_random_tile(&board, rng);
    Ok((board, 0, GameProgress::InProgress))
}

/// Board dimension N.
#[must_use]
pub fn board_size(board: &Board) -> usize {
    board.size()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    fn board(rows: Vec<Vec<u64>>) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_left_merge() {
        let b = board(vec![
            vec![2, 2, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ]);
        let out = process_move(&b, Direction::Left);
        assert_eq!(out.board.rows()[0], vec![4, 0, 0, 0]);
        assert_eq!(out.score_delta, 4);
        assert!(out.changed);
    }

    #[test]
    fn test_right_move() {
        let b = board(vec![vec![2, 2, 4], vec![0, 2, 0], vec![4, 0, 4]]);
        let out = process_move(&b, Direction::Right);
        assert_eq!(
            out.board.rows(),
            &[vec![0, 4, 4], vec![0, 0, 2], vec![0, 0, 8]]
        );
        assert_eq!(out.score_delta, 12);
    }

    #[test]
    fn test_up_move() {
        let b = board(vec![vec![0, 2, 2], vec![2, 0, 2], vec![2, 2, 4]]);
        let out = process_move(&b, Direction::Up);
        assert_eq!(
            out.board.rows(),
            &[vec![4, 4, 4], vec![0, 0, 4], vec![0, 0, 0]]
        );
        assert_eq!(out.score_delta, 12);
        assert!(out.changed);
    }

    #[test]
    fn test_down_move() {
        let b = board(vec![vec![2, 4, 0], vec![2, 0, 0], vec![4, 4, 2]]);
        let out = process_move(&b, Direction::Down);
        assert_eq!(
            out.board.rows(),
            &[vec![0, 0, 0], vec![4, 0, 0], vec![4, 8, 2]]
        );
        assert_eq!(out.score_delta, 12);
    }

    #[test]
    fn test_down_merges_bottom_pair_first() {
        let b = board(vec![vec![2, 0, 0], vec![2, 0, 0], vec![2, 0, 0]]);
        let out = process_move(&b, Direction::Down);
        assert_eq!(
            out.board.rows(),
            &[vec![0, 0, 0], vec![2, 0, 0], vec![4, 0, 0]]
        );
    }

    #[test]
    fn test_unchanged_returns_same_board() {
        let b = board(vec![vec![2, 4], vec![4, 2]]);
        for direction in Direction::ALL {
            let out = process_move(&b, direction);
            assert!(!out.changed);
            assert_eq!(out.board, b);
            assert_eq!(out.score_delta, 0);
        }
    }

    #[test]
    fn test_input_not_mutated() {
        let b = board(vec![vec![2, 2], vec![0, 0]]);
        let snapshot = b.clone();
        let _ = process_move(&b, Direction::Left);
        assert_eq!(b, snapshot);
    }

    #[test]
    fn test_empty_board_is_valid() {
        let b = Board::empty(4).unwrap();
        let out = process_move(&b, Direction::Up);
        assert!(!out.changed);
        assert_eq!(out.board, b);
    }

    #[test]
    fn test_tiles_at_the_ceiling_do_not_merge() {
        let top = 1u64 << 63;
        let b = Board::empty(2)
            .unwrap()
            .with_tile(crate::core::Cell::new(0, 0), top)
            .with_tile(crate::core::Cell::new(0, 1), top);

        let out = process_move(&b, Direction::Left);
        assert!(!out.changed);
        assert_eq!(out.board, b);
        assert!(!crate::rules::is_move_possible(&b, Direction::Left));

        let out = process_move(&b, Direction::Down);
        assert!(out.changed);
        assert_eq!(out.board.rows(), &[vec![0, 0], vec![top, top]]);
        assert_eq!(out.score_delta, 0);
    }

    #[test]
    fn test_largest_allowed_tiles_merge() {
        let b = board(vec![vec![1 << 62, 1 << 62], vec![0, 0]]);
        let out = process_move(&b, Direction::Right);
        assert_eq!(out.board.rows(), &[vec![0, 1 << 63], vec![0, 0]]);
        assert_eq!(out.score_delta, 1 << 63);
        assert_eq!(out.board.tile_sum(), b.tile_sum());
    }

    #[test]
    fn test_initialize_board() {
        let mut rng = GameRng::new(42);
        let (b, score, progress) = initialize_board(4, &mut rng).unwrap();
        assert_eq!(board_size(&b), 4);
        assert_eq!(b.cells().filter(|&(_, t)| t != 0).count(), 2);
        assert!(b.cells().all(|(_, t)| t == 0 || t == 2 || t == 4));
        assert_eq!(score, 0);
        assert_eq!(progress, GameProgress::InProgress);
    }

    #[test]
    fn test_initialize_single_cell() {
        let mut rng = GameRng::new(1);
        let (b, _, _) = initialize_board(1, &mut rng).unwrap();
        // Only one cell to fill; the second spawn is a no-op.
        assert_eq!(b.cells().filter(|&(_, t)| t != 0).count(), 1);
    }

    #[test]
    fn test_initialize_rejects_zero() {
        let mut rng = GameRng::new(1);
        assert!(initialize_board(0, &mut rng).is_err());
    }
}
