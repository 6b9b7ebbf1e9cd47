//! Cell addressing for the 3x3 board.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::types::{BOARD_SIZE, Board};

/// A cell on the tic-tac-toe board.
///
/// Positions are named, but every position also has a (row, column)
/// coordinate in `[0, 3)` and a row-major index in `[0, 9)`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Row 0, column 0.
    TopLeft,
    /// Row 0, column 1.
    TopCenter,
    /// Row 0, column 2.
    TopRight,
    /// Row 1, column 0.
    MiddleLeft,
    /// Row 1, column 1.
    Center,
    /// Row 1, column 2.
    MiddleRight,
    /// Row 2, column 0.
    BottomLeft,
    /// Row 2, column 1.
    BottomCenter,
    /// Row 2, column 2.
    BottomRight,
}

/// A (row, column) pair that does not name a cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Coordinate ({row}, {col}) is outside the 3x3 board")]
pub struct CoordinateError {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Creates a position from a row and column.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] if either coordinate is outside `[0, 3)`.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, CoordinateError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(CoordinateError { row, col });
        }
        Ok(Self::ALL[row * BOARD_SIZE + col])
    }

    /// Creates position from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Converts position to a row-major board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Row of this position.
    pub fn row(self) -> usize {
        self.to_index() / BOARD_SIZE
    }

    /// Column of this position.
    pub fn col(self) -> usize {
        self.to_index() % BOARD_SIZE
    }

    /// Position reached by stepping `(d_row, d_col)` from here, if it is on the board.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row().checked_add_signed(d_row)?;
        let col = self.col().checked_add_signed(d_col)?;
        Self::new(row, col).ok()
    }

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Parses a 1-based keypad digit (`'1'` is top-left, `'9'` bottom-right).
    pub fn from_keypad(c: char) -> Option<Self> {
        let digit = c.to_digit(10)? as usize;
        digit.checked_sub(1).and_then(Self::from_index)
    }

    /// Filters positions by board state - returns only empty squares.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.row(), self.col())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_row_col_round_trip_for_every_cell() {
        for pos in Position::iter() {
            assert_eq!(Position::new(pos.row(), pos.col()), Ok(pos));
        }
    }

    #[test]
    fn test_out_of_range_is_an_error() {
        assert_eq!(Position::new(3, 0), Err(CoordinateError { row: 3, col: 0 }));
        assert!(Position::new(0, 7).is_err());
    }

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(Position::Center.offset(-1, 1), Some(Position::TopRight));
        assert_eq!(Position::TopLeft.offset(-1, 0), None);
        assert_eq!(Position::BottomRight.offset(0, 1), None);
    }

    #[test]
    fn test_keypad_digits() {
        assert_eq!(Position::from_keypad('1'), Some(Position::TopLeft));
        assert_eq!(Position::from_keypad('5'), Some(Position::Center));
        assert_eq!(Position::from_keypad('9'), Some(Position::BottomRight));
        assert_eq!(Position::from_keypad('0'), None);
        assert_eq!(Position::from_keypad('x'), None);
    }
}
