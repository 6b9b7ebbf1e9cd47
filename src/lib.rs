//! Neon Tic-Tac-Toe - two players, one board, one input device.
//!
//! The crate is the game state machine only: it never draws, prompts or
//! plays sounds. Front ends plug in through three collaborator traits.
//!
//! # Architecture
//!
//! - **Rules**: win detection along lines through the last mark, draw detection
//! - **Round**: board, move history, turn and status, with undo
//! - **Contracts/Invariants**: pre- and postconditions checked on every transition
//! - **Match**: the round in play plus the running score
//! - **Controller**: confirmation gating and collaborator calls
//!
//! # Example
//!
//! ```
//! use neon_tictactoe::{GameController, Outcome, PlaceOutcome, Silent};
//!
//! # fn main() -> Result<(), neon_tictactoe::CoordinateError> {
//! let mut game = GameController::new(Silent, true, Silent);
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2)] {
//!     game.place(row, col)?;
//! }
//! let outcome = game.place(0, 2)?;
//! assert_eq!(outcome.outcome(), Some(Outcome::Winner(neon_tictactoe::Player::X)));
//! assert!(matches!(outcome, PlaceOutcome::Won { .. }));
//! assert_eq!(game.state().score().x_wins(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod collaborators;
pub mod contracts;
mod controller;
pub mod invariants;
mod match_state;
mod outcome;
mod position;
mod round;
pub mod rules;
mod score;
mod types;
mod view;

pub use action::Move;
pub use collaborators::{Announce, Confirm, ConfirmRequest, Confirmation, Render, Silent};
pub use controller::{CommandOutcome, GameController};
pub use match_state::MatchState;
pub use outcome::{Outcome, Rejection};
pub use position::{CoordinateError, Position};
pub use round::{InvalidRound, PlaceOutcome, Round, RoundStatus, UndoOutcome};
pub use rules::{Axis, WinningLine};
pub use score::MatchScore;
pub use types::{BOARD_SIZE, Board, Player, Square, WIN_LENGTH};
pub use view::Snapshot;
