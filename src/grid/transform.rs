//! Transpose and row reversal, and the orientation each direction needs.
//!
//! Every move is run as a slide to the left. A direction is mapped onto
//! that canonical case by reorienting the board first and undoing the
//! reorientation afterwards:
//!
//! | Direction | orient                       | restore                      |
//! |-----------|------------------------------|------------------------------|
//! | Left      | identity                     | identity                     |
//! | Right     | reverse_rows                 | reverse_rows                 |
//! | Up        | transpose                    | transpose                    |
//! | Down      | reverse_rows(transpose(b))   | transpose(reverse_rows(b))   |

use crate::core::{Board, Direction};

/// Swap rows and columns.
#[must_use]
pub fn transpose(board: &Board) -> Board {
    let n = board.size();
    let rows = board.rows();
    let transposed = (0..n)
        .map(|c| (0..n).map(|r| rows[r][c]).collect())
        .collect();
    Board::from_square_rows(transposed)
}

/// Reverse the order of tiles within each row.
#[must_use]
pub fn reverse_rows(board: &Board) -> Board {
    let reversed = board
        .rows()
        .iter()
        .map(|row| row.iter().rev().copied().collect())
        .collect();
    Board::from_square_rows(reversed)
}

/// Reorient `board` so that `direction` becomes a slide to the left.
#[must_use]
pub fn orient(board: &Board, direction: Direction) -> Board {
    match direction {
        Direction::Left => board.clone(),
        Direction::Right => reverse_rows(board),
        Direction::Up => transpose(board),
        Direction::Down => reverse_rows(&transpose(board)),
    }
}

/// Undo [`orient`].
#[must_use]
pub fn restore(board: &Board, direction: Direction) -> Board {
    match direction {
        Direction::Left => board.clone(),
        Direction::Right => reverse_rows(board),
        Direction::Up => transpose(board),
        Direction::Down => transpose(&reverse_rows(board)),
    }
}
