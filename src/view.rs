//! State-to-view projection.

use serde::{Deserialize, Serialize};

use crate::collaborators::ConfirmRequest;
use crate::match_state::MatchState;
use crate::outcome::Outcome;
use crate::position::Position;
use crate::score::MatchScore;
use crate::types::{BOARD_SIZE, Player, Square};

/// Everything a front end needs to draw the game, detached from the state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Squares by row, then column.
    pub cells: [[Square; BOARD_SIZE]; BOARD_SIZE],
    /// Player to move (the winner, once won).
    pub to_move: Player,
    /// How the round ended, if it has.
    pub outcome: Option<Outcome>,
    /// Cells of the winning line, empty unless won.
    pub winning_line: Vec<Position>,
    /// Running score.
    pub score: MatchScore,
    /// Marks placed this round.
    pub moves: usize,
    /// Whether undo would take effect.
    pub can_undo: bool,
    /// Confirmation waiting for an answer.
    pub pending: Option<ConfirmRequest>,
}

impl Snapshot {
    /// Projects `state` (plus any pending confirmation) into a view.
    pub fn project(state: &MatchState, pending: Option<ConfirmRequest>) -> Self {
        let round = state.round();
        Self {
            cells: *round.board().rows(),
            to_move: round.to_move(),
            outcome: round.status().outcome(),
            winning_line: round
                .status()
                .winning_line()
                .map(|line| line.positions().to_vec())
                .unwrap_or_default(),
            score: *state.score(),
            moves: round.history().len(),
            can_undo: round.can_undo(),
            pending,
        }
    }

    /// Square at `pos`.
    pub fn square(&self, pos: Position) -> Square {
        self.cells[pos.row()][pos.col()]
    }

    /// Whether `pos` is part of the winning line.
    pub fn is_winning(&self, pos: Position) -> bool {
        self.winning_line.contains(&pos)
    }

    /// Whether the round has ended.
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_match_projection() {
        let snapshot = Snapshot::project(&MatchState::new(), None);
        assert_eq!(snapshot.to_move, Player::X);
        assert_eq!(snapshot.moves, 0);
        assert!(!snapshot.can_undo);
        assert!(!snapshot.is_over());
        assert!(Position::ALL.iter().all(|p| snapshot.square(*p) == Square::Empty));
    }

    #[test]
    fn test_projection_marks_winning_cells() {
        let mut state = MatchState::new();
        for pos in [
            Position::TopRight,
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
        ] {
            state.place(pos);
        }
        let snapshot = Snapshot::project(&state, None);
        assert_eq!(snapshot.outcome, Some(Outcome::Winner(Player::X)));
        assert!(snapshot.is_winning(Position::Center));
        assert!(!snapshot.is_winning(Position::TopLeft));
        assert_eq!(snapshot.square(Position::TopLeft), Square::Occupied(Player::O));
        assert!(!snapshot.can_undo);
    }
}
