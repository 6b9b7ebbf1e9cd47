//! How a round ended, and why a request was turned away.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::types::Player;

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a line.
    Winner(Player),
    /// Board filled with no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} wins!", player),
            Outcome::Draw => write!(f, "Draw!"),
        }
    }
}

/// Reason a request was ignored.
///
/// Rejections are not errors: the request simply had no effect and the
/// state is exactly as it was before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Rejection {
    /// The round has already been won or drawn.
    #[display("Round is already over")]
    RoundOver,
    /// The target square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
    /// No move has been made this round.
    #[display("Nothing to undo")]
    NothingToUndo,
    /// A confirmation prompt is waiting for an answer.
    #[display("Waiting for confirmation")]
    AwaitingConfirmation,
    /// An answer was given but no confirmation was pending.
    #[display("No confirmation is pending")]
    NothingPending,
}
