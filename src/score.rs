//! Cumulative match score.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::outcome::Outcome;
use crate::types::Player;

/// Win and draw counters that persist across rounds.
///
/// Each completed round adds exactly one to exactly one counter. Counters
/// only go back to zero through [`MatchScore::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MatchScore {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl MatchScore {
    /// Creates a zeroed score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds won by X.
    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    /// Rounds won by O.
    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    /// Rounds drawn.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Rounds won by `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Completed rounds counted so far.
    pub fn rounds_played(&self) -> u32 {
        self.x_wins
            .saturating_add(self.o_wins)
            .saturating_add(self.draws)
    }

    /// Credits a completed round.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) {
        let counter = match outcome {
            Outcome::Winner(Player::X) => &mut self.x_wins,
            Outcome::Winner(Player::O) => &mut self.o_wins,
            Outcome::Draw => &mut self.draws,
        };
        *counter = counter.saturating_add(1);
        debug!(score = ?self, "Score updated");
    }

    /// Zeroes all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_attributes_outcome() {
        let mut score = MatchScore::new();
        score.record(Outcome::Winner(Player::O));
        score.record(Outcome::Draw);
        score.record(Outcome::Winner(Player::O));

        assert_eq!(score.x_wins(), 0);
        assert_eq!(score.o_wins(), 2);
        assert_eq!(score.wins(Player::O), 2);
        assert_eq!(score.draws(), 1);
        assert_eq!(score.rounds_played(), 3);
    }

    #[test]
    fn test_rounds_played_saturates() {
        let score = MatchScore {
            x_wins: u32::MAX,
            o_wins: 1,
            draws: 1,
        };
        assert_eq!(score.rounds_played(), u32::MAX);
    }

    #[test]
    fn test_reset_zeroes_everything() {
        let mut score = MatchScore::new();
        score.record(Outcome::Winner(Player::X));
        score.reset();
        assert_eq!(score, MatchScore::default());
    }
}
