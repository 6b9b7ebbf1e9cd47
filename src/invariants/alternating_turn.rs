//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{Player, Round};

/// Invariant: Players alternate turns, X first.
///
/// While the round is in progress the player to move follows from the
/// history length alone, which holds after an undo as well as after a
/// placement.
pub struct AlternatingTurnInvariant;

impl Invariant<Round> for AlternatingTurnInvariant {
    fn holds(round: &Round) -> bool {
        let history = round.history();

        if history.first().is_some_and(|m| m.player != Player::X) {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        if round.status().is_over() {
            return true;
        }

        let expected = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        round.to_move() == expected
    }

    fn description() -> &'static str {
        "Players alternate (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Position};

    #[test]
    fn test_alternation_holds_through_undo() {
        let mut round = Round::new();
        round.place(Position::Center);
        round.place(Position::TopLeft);
        round.undo();
        assert!(AlternatingTurnInvariant::holds(&round));
        assert_eq!(round.to_move(), Player::O);
    }

    #[test]
    fn test_wrong_first_player_violates() {
        let mut round = Round::new();
        round.history.push(Move::new(Player::O, Position::Center));
        assert!(!AlternatingTurnInvariant::holds(&round));
    }

    #[test]
    fn test_stale_turn_violates() {
        let mut round = Round::new();
        round.place(Position::Center);
        round.to_move = Player::X;
        assert!(!AlternatingTurnInvariant::holds(&round));
    }
}
