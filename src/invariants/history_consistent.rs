//! History consistency invariant: history length matches occupied squares.

use super::Invariant;
use crate::Round;

/// Invariant: History length equals number of occupied squares.
///
/// Every move in history corresponds to exactly one occupied square.
/// Undo removes both together.
pub struct HistoryConsistentInvariant;

impl Invariant<Round> for HistoryConsistentInvariant {
    fn holds(round: &Round) -> bool {
        round.history().len() == round.board().occupied()
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    #[test]
    fn test_empty_round_holds() {
        assert!(HistoryConsistentInvariant::holds(&Round::new()));
    }

    #[test]
    fn test_place_and_undo_hold() {
        let mut round = Round::new();
        round.place(Position::Center);
        round.place(Position::TopLeft);
        assert!(HistoryConsistentInvariant::holds(&round));
        round.undo();
        assert!(HistoryConsistentInvariant::holds(&round));
        assert_eq!(round.history().len(), 1);
    }

    #[test]
    fn test_corrupted_history_violates() {
        let mut round = Round::new();
        round.place(Position::Center);
        round.board.set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(!HistoryConsistentInvariant::holds(&round));
    }
}
