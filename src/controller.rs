//! Game controller: owns the match state and drives the collaborators.

use tracing::{debug, info, instrument};

use crate::collaborators::{Announce, Confirm, ConfirmRequest, Confirmation, Render};
use crate::match_state::MatchState;
use crate::outcome::Rejection;
use crate::position::{CoordinateError, Position};
use crate::round::{PlaceOutcome, UndoOutcome};
use crate::view::Snapshot;

/// Result of a new-round, reset or answer command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandOutcome {
    /// The command ran.
    Applied,
    /// Confirmation was refused; nothing changed.
    Declined,
    /// The command is parked until [`GameController::answer`] is called.
    AwaitingConfirmation,
    /// The command was ignored.
    Rejected(Rejection),
}

/// The game state machine.
///
/// Every action runs to completion before the next is accepted. The
/// renderer sees a [`Snapshot`] on construction and after each state
/// change; the announcer hears about each finished round exactly once.
///
/// While a deferred confirmation is pending every command other than
/// [`answer`](Self::answer) is rejected with
/// [`Rejection::AwaitingConfirmation`].
#[derive(Debug)]
pub struct GameController<R, C, A> {
    state: MatchState,
    pending: Option<ConfirmRequest>,
    renderer: R,
    confirmer: C,
    announcer: A,
}

impl<R: Render, C: Confirm, A: Announce> GameController<R, C, A> {
    /// Creates a controller with a fresh match and renders it once.
    #[instrument(skip_all)]
    pub fn new(renderer: R, confirmer: C, announcer: A) -> Self {
        let mut controller = Self {
            state: MatchState::new(),
            pending: None,
            renderer,
            confirmer,
            announcer,
        };
        controller.publish();
        controller
    }

    /// Returns the match state.
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Returns the confirmation waiting for an answer, if any.
    pub fn pending_confirmation(&self) -> Option<ConfirmRequest> {
        self.pending
    }

    /// Projects the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::project(&self.state, self.pending)
    }

    /// Returns the render collaborator.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Returns the announce collaborator.
    pub fn announcer(&self) -> &A {
        &self.announcer
    }

    /// Returns the announce collaborator mutably.
    pub fn announcer_mut(&mut self) -> &mut A {
        &mut self.announcer
    }

    /// Returns the confirm collaborator mutably.
    pub fn confirmer_mut(&mut self) -> &mut C {
        &mut self.confirmer
    }

    /// Places the current player's mark at (`row`, `col`).
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] if the coordinate is off the board;
    /// the state is untouched.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, col: usize) -> Result<PlaceOutcome, CoordinateError> {
        let pos = Position::new(row, col)?;
        Ok(self.place_at(pos))
    }

    /// Places the current player's mark at `pos`.
    #[instrument(skip(self))]
    pub fn place_at(&mut self, pos: Position) -> PlaceOutcome {
        if self.pending.is_some() {
            return PlaceOutcome::Rejected(Rejection::AwaitingConfirmation);
        }

        let outcome = self.state.place(pos);
        if outcome.is_rejected() {
            return outcome;
        }

        self.publish();
        if let Some(result) = outcome.outcome() {
            self.announcer.announce(result);
        }
        outcome
    }

    /// Takes back the last mark of the round in play.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> UndoOutcome {
        if self.pending.is_some() {
            return UndoOutcome::Rejected(Rejection::AwaitingConfirmation);
        }

        let outcome = self.state.undo();
        if let UndoOutcome::Undone(_) = outcome {
            self.publish();
        }
        outcome
    }

    /// Starts a new round, keeping the score.
    ///
    /// With `require_confirmation` the confirm collaborator is asked first.
    #[instrument(skip(self))]
    pub fn new_round(&mut self, require_confirmation: bool) -> CommandOutcome {
        if self.pending.is_some() {
            return CommandOutcome::Rejected(Rejection::AwaitingConfirmation);
        }

        if require_confirmation {
            self.gate(ConfirmRequest::NewRound)
        } else {
            self.apply(ConfirmRequest::NewRound)
        }
    }

    /// Clears the score and starts a new round, after confirmation.
    #[instrument(skip(self))]
    pub fn reset_match(&mut self) -> CommandOutcome {
        if self.pending.is_some() {
            return CommandOutcome::Rejected(Rejection::AwaitingConfirmation);
        }
        self.gate(ConfirmRequest::ResetMatch)
    }

    /// Resolves a deferred confirmation: `yes` runs it, otherwise it is dropped.
    #[instrument(skip(self))]
    pub fn answer(&mut self, yes: bool) -> CommandOutcome {
        let Some(request) = self.pending.take() else {
            return CommandOutcome::Rejected(Rejection::NothingPending);
        };

        if yes {
            self.apply(request)
        } else {
            debug!(?request, "Deferred confirmation declined");
            self.publish();
            CommandOutcome::Declined
        }
    }

    fn gate(&mut self, request: ConfirmRequest) -> CommandOutcome {
        match self.confirmer.confirm(request) {
            Confirmation::Granted => self.apply(request),
            Confirmation::Declined => {
                debug!(?request, "Confirmation declined");
                CommandOutcome::Declined
            }
            Confirmation::Deferred => {
                debug!(?request, "Confirmation deferred");
                self.pending = Some(request);
                self.publish();
                CommandOutcome::AwaitingConfirmation
            }
        }
    }

    fn apply(&mut self, request: ConfirmRequest) -> CommandOutcome {
        match request {
            ConfirmRequest::NewRound => self.state.start_new_round(),
            ConfirmRequest::ResetMatch => self.state.reset_match(),
        }
        info!(?request, "Command applied");
        self.publish();
        CommandOutcome::Applied
    }

    fn publish(&mut self) {
        let snapshot = self.snapshot();
        self.renderer.render(&snapshot);
    }
}
