//! Draw detection logic for tic-tac-toe.

use crate::types::{Board, Square};

use super::win::check_winner;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().all(|s| s != Square::Empty)
}

/// A full board with no line of three.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
