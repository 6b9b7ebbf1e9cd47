//! Win detection logic for tic-tac-toe.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{instrument, trace};

use crate::position::Position;
use crate::types::{Board, Player, Square, WIN_LENGTH};

/// One of the four line directions through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Axis {
    /// Along a row.
    Horizontal,
    /// Along a column.
    Vertical,
    /// Top-left to bottom-right (↘).
    Diagonal,
    /// Top-right to bottom-left (↙).
    AntiDiagonal,
}

impl Axis {
    /// Forward step `(d_row, d_col)` along this axis.
    pub fn step(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::Diagonal => (1, 1),
            Axis::AntiDiagonal => (1, -1),
        }
    }
}

/// The run of cells that won a round.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    axis: Axis,
    positions: Vec<Position>,
}

impl WinningLine {
    /// Axis the run lies on.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Cells of the run, ordered from the backward end to the forward end of the axis.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Whether the run passes through `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}

/// Cells holding `player` reached by repeatedly stepping from `from`, excluding `from`.
fn extend(
    board: &Board,
    from: Position,
    (d_row, d_col): (isize, isize),
    player: Player,
) -> impl Iterator<Item = Position> + '_ {
    std::iter::successors(from.offset(d_row, d_col), move |pos| pos.offset(d_row, d_col))
        .take_while(move |pos| board.get(*pos) == Square::Occupied(player))
}

/// Finds the winning run through the mark `player` just placed at `last`.
///
/// Axes are examined horizontal, vertical, ↘, ↙; the first whose run
/// reaches [`WIN_LENGTH`] wins. Only lines through `last` can have been
/// completed by the placement, so nothing else is scanned.
#[instrument(skip(board))]
pub fn winning_run(board: &Board, last: Position, player: Player) -> Option<WinningLine> {
    for axis in Axis::iter() {
        let (d_row, d_col) = axis.step();

        let mut positions: Vec<Position> = extend(board, last, (-d_row, -d_col), player).collect();
        positions.reverse();
        positions.push(last);
        positions.extend(extend(board, last, (d_row, d_col), player));

        trace!(?axis, run = positions.len(), "Measured run");
        if positions.len() >= WIN_LENGTH {
            return Some(WinningLine { axis, positions });
        }
    }
    None
}

/// All eight lines of the board.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Scans every line of the board for three identical marks.
///
/// Gameplay uses [`winning_run`]; this full scan backs invariant checks.
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|[a, b, c]| {
        let sq = board.get(*a);
        match sq {
            Square::Occupied(player) if sq == board.get(*b) && sq == board.get(*c) => Some(player),
            _ => None,
        }
    })
}
