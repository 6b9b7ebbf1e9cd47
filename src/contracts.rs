//! Contract-based validation for round transitions.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. A failed precondition is an ordinary [`Rejection`]; a
//! failed postcondition is a bug and is enforced in debug builds only.

use crate::invariants::{InvariantSet, InvariantViolation, RoundInvariants};
use crate::outcome::Rejection;
use crate::position::Position;
use crate::round::Round;
use crate::types::Square;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The round has not been won or drawn.
pub struct RoundInProgress;

impl RoundInProgress {
    /// Rejects with [`Rejection::RoundOver`] once the round has ended.
    pub fn check(round: &Round) -> Result<(), Rejection> {
        if round.status().is_over() {
            Err(Rejection::RoundOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The square at the target position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects with [`Rejection::SquareOccupied`] if `pos` holds a mark.
    pub fn check(pos: Position, round: &Round) -> Result<(), Rejection> {
        if round.board().is_empty(pos) {
            Ok(())
        } else {
            Err(Rejection::SquareOccupied(pos))
        }
    }
}

/// Precondition: At least one move has been made this round.
pub struct HistoryNonEmpty;

impl HistoryNonEmpty {
    /// Rejects with [`Rejection::NothingToUndo`] on an empty history.
    pub fn check(round: &Round) -> Result<(), Rejection> {
        if round.history().is_empty() {
            Err(Rejection::NothingToUndo)
        } else {
            Ok(())
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Place Contract
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Preconditions:
/// - Round in progress
/// - Square empty
///
/// Postconditions:
/// - History grew by exactly one move, leaving earlier moves untouched
/// - All round invariants hold
pub struct PlaceContract;

impl Contract<Round, Position> for PlaceContract {
    fn pre(round: &Round, pos: &Position) -> Result<(), Rejection> {
        RoundInProgress::check(round)?;
        SquareIsEmpty::check(*pos, round)
    }

    fn post(before: &Round, after: &Round) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = invariant_violations(after);
        let grew_by_one = after.history().len() == before.history().len() + 1
            && after.history().starts_with(before.history());
        if !grew_by_one {
            violations.push(InvariantViolation::new(
                "Placement appends exactly one move to history",
            ));
        }
        into_result(violations)
    }
}

// ─────────────────────────────────────────────────────────────
//  Undo Contract
// ─────────────────────────────────────────────────────────────

/// Contract for undoing the last mark.
///
/// Preconditions:
/// - Round in progress
/// - History non-empty
///
/// Postconditions:
/// - History lost exactly its last move and that square is empty again
/// - The turn belongs to the player of the removed move
/// - All round invariants hold
pub struct UndoContract;

impl Contract<Round, ()> for UndoContract {
    fn pre(round: &Round, _action: &()) -> Result<(), Rejection> {
        RoundInProgress::check(round)?;
        HistoryNonEmpty::check(round)
    }

    fn post(before: &Round, after: &Round) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = invariant_violations(after);
        let rolled_back = match before.history().split_last() {
            Some((last, rest)) => {
                after.history() == rest
                    && after.board().get(last.position) == Square::Empty
                    && after.to_move() == last.player
            }
            None => false,
        };
        if !rolled_back {
            violations.push(InvariantViolation::new(
                "Undo removes exactly the last move and returns its turn",
            ));
        }
        into_result(violations)
    }
}

fn invariant_violations(round: &Round) -> Vec<InvariantViolation> {
    RoundInvariants::check_all(round).err().unwrap_or_default()
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Panics on a failed postcondition (debug builds).
#[cfg(debug_assertions)]
pub(crate) fn enforce(result: Result<(), Vec<InvariantViolation>>) {
    if let Err(violations) = result {
        for violation in &violations {
            tracing::warn!(violation = %violation.description, "Postcondition failed");
        }
        panic!("Round postcondition failed: {violations:?}");
    }
}
