//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are separated from
//! round bookkeeping so they can be reused by invariant checks.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Axis, WinningLine, check_winner, winning_run};
