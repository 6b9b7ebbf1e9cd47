//! Match state: the round in play and the running score.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::position::Position;
use crate::round::{PlaceOutcome, Round, UndoOutcome};
use crate::score::MatchScore;

/// A sequence of rounds sharing one score.
///
/// This is the whole mutable state of a game session. It applies every
/// operation unconditionally; confirmation gating lives in
/// [`GameController`](crate::GameController).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchState {
    round: Round,
    score: MatchScore,
}

impl MatchState {
    /// Creates a match with a fresh round and zeroed score.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the round in play.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Returns the running score.
    pub fn score(&self) -> &MatchScore {
        &self.score
    }

    /// Places the current player's mark, crediting the score if the round ends.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position) -> PlaceOutcome {
        let outcome = self.round.place(pos);
        if let Some(result) = outcome.outcome() {
            self.score.record(result);
            info!(%result, score = ?self.score, "Round complete");
        }
        outcome
    }

    /// Takes back the last mark of the round in play.
    pub fn undo(&mut self) -> UndoOutcome {
        self.round.undo()
    }

    /// Discards the round in play and starts a fresh one. The score is kept.
    #[instrument(skip(self))]
    pub fn start_new_round(&mut self) {
        self.round = Round::new();
        info!("New round started");
    }

    /// Zeroes the score and starts a fresh round.
    #[instrument(skip(self))]
    pub fn reset_match(&mut self) {
        self.score.reset();
        info!("Match score cleared");
        self.start_new_round();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Outcome, Player};

    #[test]
    fn test_score_credited_once_on_win() {
        let mut state = MatchState::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomRight,
            Position::TopRight,
        ] {
            state.place(pos);
        }
        assert_eq!(state.round().status().outcome(), Some(Outcome::Winner(Player::X)));
        assert_eq!(state.score().x_wins(), 1);

        // Further requests are ignored and credit nothing.
        state.place(Position::BottomLeft);
        assert_eq!(state.score().rounds_played(), 1);
    }

    #[test]
    fn test_new_round_keeps_score_reset_clears_it() {
        let mut state = MatchState::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomRight,
            Position::TopRight,
        ] {
            state.place(pos);
        }

        state.start_new_round();
        assert_eq!(state.round(), &Round::new());
        assert_eq!(state.score().x_wins(), 1);

        state.reset_match();
        assert_eq!(state, MatchState::new());
    }

    #[test]
    fn test_deserialize_checks_the_round() {
        let mut state = MatchState::new();
        state.place(Position::Center);
        let json = serde_json::to_value(&state).expect("serializable");
        let back: MatchState = serde_json::from_value(json.clone()).expect("consistent match");
        assert_eq!(back, state);

        let mut broken = json;
        broken["round"]["history"] = serde_json::json!([]);
        assert!(serde_json::from_value::<MatchState>(broken).is_err());
    }
}
