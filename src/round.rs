//! A single round: board, move history, turn and status.
//!
//! Every mutation either applies completely or is reported as a
//! [`Rejection`] with the round left untouched.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::action::Move;
use crate::contracts::{Contract, PlaceContract, UndoContract};
use crate::invariants::{InvariantSet, InvariantViolation, RoundInvariants};
use crate::outcome::{Outcome, Rejection};
use crate::position::Position;
use crate::rules::{self, WinningLine};
use crate::types::{Board, Player, Square};

/// Status of the round in play.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Marks can be placed and undone.
    #[default]
    InProgress,
    /// A player completed a line.
    Won {
        /// Player who completed the line.
        winner: Player,
        /// The completed line.
        line: WinningLine,
    },
    /// The board filled with no line.
    Drawn,
}

impl RoundStatus {
    /// Returns true once the round has been won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, RoundStatus::InProgress)
    }

    /// Outcome of a finished round.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            RoundStatus::InProgress => None,
            RoundStatus::Won { winner, .. } => Some(Outcome::Winner(*winner)),
            RoundStatus::Drawn => Some(Outcome::Draw),
        }
    }

    /// Winning line, if the round was won.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        match self {
            RoundStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }
}

/// Result of asking to place a mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// Mark placed; the round continues with `next` to move.
    Continue {
        /// Player now to move.
        next: Player,
    },
    /// Mark placed and it completed a line.
    Won {
        /// Player who placed the winning mark.
        winner: Player,
        /// The completed line, for highlighting.
        line: WinningLine,
    },
    /// Mark placed and it filled the board with no line.
    Drawn,
    /// Nothing happened.
    Rejected(Rejection),
}

impl PlaceOutcome {
    /// Outcome of the round if this placement ended it.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            PlaceOutcome::Won { winner, .. } => Some(Outcome::Winner(*winner)),
            PlaceOutcome::Drawn => Some(Outcome::Draw),
            PlaceOutcome::Continue { .. } | PlaceOutcome::Rejected(_) => None,
        }
    }

    /// Returns true if the request was ignored.
    pub fn is_rejected(&self) -> bool {
        matches!(self, PlaceOutcome::Rejected(_))
    }
}

/// Result of asking to undo the last mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The move was taken back; its player is to move again.
    Undone(Move),
    /// Nothing happened.
    Rejected(Rejection),
}

/// One playthrough from empty board to a win or draw.
///
/// X always opens. The history holds exactly the marks on the board, in
/// the order they were placed.
///
/// Deserialization checks every round invariant and fails with
/// [`InvalidRound`] instead of producing an inconsistent round.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RoundRecord")]
pub struct Round {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) to_move: Player,
    pub(crate) status: RoundStatus,
}

/// Serialized round fields, not yet checked.
#[derive(Deserialize)]
struct RoundRecord {
    board: Board,
    history: Vec<Move>,
    to_move: Player,
    status: RoundStatus,
}

/// A serialized round that breaks one or more invariants.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Inconsistent round: {}", summary)]
pub struct InvalidRound {
    /// Descriptions of the violated invariants, joined.
    pub summary: String,
    /// Every violation found.
    pub violations: Vec<InvariantViolation>,
}

impl TryFrom<RoundRecord> for Round {
    type Error = InvalidRound;

    fn try_from(record: RoundRecord) -> Result<Self, Self::Error> {
        let round = Self {
            board: record.board,
            history: record.history,
            to_move: record.to_move,
            status: record.status,
        };
        RoundInvariants::check_all(&round).map_err(|violations| InvalidRound {
            summary: violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; "),
            violations,
        })?;
        Ok(round)
    }
}

impl Round {
    /// Creates a fresh round: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the player to move (the winner, once won).
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the round status.
    pub fn status(&self) -> &RoundStatus {
        &self.status
    }

    /// Returns true if undo would currently take effect.
    pub fn can_undo(&self) -> bool {
        UndoContract::pre(self, &()).is_ok()
    }

    /// Places the current player's mark at `pos`.
    ///
    /// A win is checked only along lines through `pos`. On a win the turn
    /// stays with the winner; on a draw it stays put; otherwise it passes
    /// to the opponent.
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn place(&mut self, pos: Position) -> PlaceOutcome {
        if let Err(rejection) = PlaceContract::pre(self, &pos) {
            debug!(%rejection, "Placement ignored");
            return PlaceOutcome::Rejected(rejection);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.to_move;
        self.board.set(pos, Square::Occupied(player));
        self.history.push(Move::new(player, pos));

        let outcome = if let Some(line) = rules::winning_run(&self.board, pos, player) {
            info!(
                winner = %player,
                line = ?line.positions(),
                board = %self.board.display(),
                "Round won"
            );
            self.status = RoundStatus::Won {
                winner: player,
                line: line.clone(),
            };
            PlaceOutcome::Won {
                winner: player,
                line,
            }
        } else if rules::is_full(&self.board) {
            info!(board = %self.board.display(), "Round drawn");
            self.status = RoundStatus::Drawn;
            PlaceOutcome::Drawn
        } else {
            self.to_move = player.opponent();
            PlaceOutcome::Continue { next: self.to_move }
        };

        #[cfg(debug_assertions)]
        crate::contracts::enforce(PlaceContract::post(&before, self));

        outcome
    }

    /// Takes back the most recent mark and hands the turn back to its player.
    ///
    /// Only allowed while the round is in progress.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> UndoOutcome {
        if let Err(rejection) = UndoContract::pre(self, &()) {
            debug!(%rejection, "Undo ignored");
            return UndoOutcome::Rejected(rejection);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let Some(last) = self.history.pop() else {
            return UndoOutcome::Rejected(Rejection::NothingToUndo);
        };
        self.board.set(last.position, Square::Empty);
        self.to_move = last.player;
        debug!(undone = %last, "Move undone");

        #[cfg(debug_assertions)]
        crate::contracts::enforce(UndoContract::post(&before, self));

        UndoOutcome::Undone(last)
    }
}
