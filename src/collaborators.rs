//! Capabilities the game controller calls out to.
//!
//! The controller never renders, prompts or announces by itself. It hands
//! a [`Snapshot`] to a [`Render`] after each mutation, asks a [`Confirm`]
//! before destructive commands, and tells an [`Announce`] how each round
//! ended.

use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;
use crate::view::Snapshot;

/// Receives the state after every mutation.
pub trait Render {
    /// Draws or stores the given snapshot.
    fn render(&mut self, snapshot: &Snapshot);
}

impl<F: FnMut(&Snapshot)> Render for F {
    fn render(&mut self, snapshot: &Snapshot) {
        self(snapshot)
    }
}

/// Told once when a round ends.
pub trait Announce {
    /// Reports the outcome of the round that just finished.
    fn announce(&mut self, outcome: Outcome);
}

impl<F: FnMut(Outcome)> Announce for F {
    fn announce(&mut self, outcome: Outcome) {
        self(outcome)
    }
}

/// A command that needs a yes/no answer before it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfirmRequest {
    /// Abandon the round in play.
    NewRound,
    /// Clear the score and abandon the round in play.
    ResetMatch,
}

impl ConfirmRequest {
    /// Question to put to the players.
    pub fn prompt(self) -> &'static str {
        match self {
            ConfirmRequest::NewRound => "Start a new round?",
            ConfirmRequest::ResetMatch => "Reset match and clear scores?",
        }
    }
}

/// Answer from a [`Confirm`] collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Confirmation {
    /// Run the command now.
    Granted,
    /// Drop the command; nothing changes.
    Declined,
    /// The answer will come later through
    /// [`GameController::answer`](crate::GameController::answer).
    Deferred,
}

/// Yes/no gate in front of new-round and reset commands.
pub trait Confirm {
    /// Answers `request`.
    fn confirm(&mut self, request: ConfirmRequest) -> Confirmation;
}

/// A fixed answer.
impl Confirm for Confirmation {
    fn confirm(&mut self, _request: ConfirmRequest) -> Confirmation {
        *self
    }
}

/// `true` grants, `false` declines.
impl Confirm for bool {
    fn confirm(&mut self, _request: ConfirmRequest) -> Confirmation {
        if *self {
            Confirmation::Granted
        } else {
            Confirmation::Declined
        }
    }
}

/// Collaborator that ignores everything it is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Render for Silent {
    fn render(&mut self, _snapshot: &Snapshot) {}
}

impl Announce for Silent {
    fn announce(&mut self, _outcome: Outcome) {}
}
