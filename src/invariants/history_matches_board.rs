//! History/board agreement: replaying the history rebuilds the board.

use super::Invariant;
use crate::{Board, Round, Square};

/// Invariant: the board is exactly the history replayed onto an empty board.
///
/// Each move lands on a square that was empty at the time, so no square
/// is ever overwritten and the marks on the board are the marks in
/// history.
pub struct HistoryMatchesBoardInvariant;

impl Invariant<Round> for HistoryMatchesBoardInvariant {
    fn holds(round: &Round) -> bool {
        let mut reconstructed = Board::new();

        for mov in round.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.player));
        }

        reconstructed == *round.board()
    }

    fn description() -> &'static str {
        "Board equals move history replayed onto an empty board"
    }
}
