//! Status invariant: the recorded status agrees with the board.

use super::Invariant;
use crate::round::RoundStatus;
use crate::rules::{check_winner, is_draw, is_full, winning_run};
use crate::Round;

/// Invariant: The round status is what a full scan of the board says.
///
/// - In progress: no line of three and at least one empty square
/// - Won: the winner made the last move, the recorded line is the run
///   that move completed, and the winner keeps the turn
/// - Drawn: full board with no line
pub struct StatusMatchesBoardInvariant;

impl Invariant<Round> for StatusMatchesBoardInvariant {
    fn holds(round: &Round) -> bool {
        let board = round.board();
        match round.status() {
            RoundStatus::InProgress => check_winner(board).is_none() && !is_full(board),
            RoundStatus::Won { winner, line } => {
                let completed_by_last = round.history().last().is_some_and(|last| {
                    last.player == *winner
                        && winning_run(board, last.position, *winner).as_ref() == Some(line)
                });
                completed_by_last && round.to_move() == *winner
            }
            RoundStatus::Drawn => is_draw(board),
        }
    }

    fn description() -> &'static str {
        "Round status agrees with the marks on the board"
    }
}
