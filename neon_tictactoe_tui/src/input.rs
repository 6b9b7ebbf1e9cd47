//! Key bindings and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use neon_tictactoe::Position;

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor by (rows, cols).
    MoveCursor(isize, isize),
    /// Place a mark under the cursor.
    PlaceAtCursor,
    /// Place a mark on a given cell.
    PlaceAt(Position),
    /// Take back the last mark.
    Undo,
    /// Start a new round.
    NewRound,
    /// Reset the match.
    ResetMatch,
    /// Answer the open dialog.
    Answer(bool),
    /// Leave the game.
    Quit,
}

/// Maps a key press to an action.
///
/// With a dialog open only answers are accepted, so a stray key cannot
/// slip a move in behind the question.
pub fn map_key(key: KeyEvent, dialog_open: bool) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if dialog_open {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Action::Answer(true)),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::Answer(false)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveCursor(0, -1)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveCursor(0, 1)),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveCursor(-1, 0)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveCursor(1, 0)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceAtCursor),
        KeyCode::Char('u') => Some(Action::Undo),
        KeyCode::Char('r') => Some(Action::NewRound),
        KeyCode::Char('R') => Some(Action::ResetMatch),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c) => Position::from_keypad(c).map(Action::PlaceAt),
        _ => None,
    }
}

/// Moves the cursor, stopping at the board edge.
pub fn move_cursor(cursor: Position, d_row: isize, d_col: isize) -> Position {
    cursor.offset(d_row, d_col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrows_and_vi_keys_agree() {
        assert_eq!(map_key(press(KeyCode::Left), false), map_key(press(KeyCode::Char('h')), false));
        assert_eq!(map_key(press(KeyCode::Down), false), Some(Action::MoveCursor(1, 0)));
        assert_eq!(map_key(press(KeyCode::Char('k')), false), Some(Action::MoveCursor(-1, 0)));
    }

    #[test]
    fn test_digits_place_directly() {
        assert_eq!(
            map_key(press(KeyCode::Char('7')), false),
            Some(Action::PlaceAt(Position::BottomLeft))
        );
        assert_eq!(map_key(press(KeyCode::Char('0')), false), None);
    }

    #[test]
    fn test_round_and_match_keys_are_distinct() {
        assert_eq!(map_key(press(KeyCode::Char('r')), false), Some(Action::NewRound));
        let shifted = KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT);
        assert_eq!(map_key(shifted, false), Some(Action::ResetMatch));
    }

    #[test]
    fn test_dialog_only_takes_answers() {
        assert_eq!(map_key(press(KeyCode::Enter), true), Some(Action::Answer(true)));
        assert_eq!(map_key(press(KeyCode::Esc), true), Some(Action::Answer(false)));
        assert_eq!(map_key(press(KeyCode::Char('n')), true), Some(Action::Answer(false)));
        assert_eq!(map_key(press(KeyCode::Char('5')), true), None);
        assert_eq!(map_key(press(KeyCode::Char('q')), true), None);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c, true), Some(Action::Quit));
        assert_eq!(map_key(ctrl_c, false), Some(Action::Quit));
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::Center, 0, 1), Position::MiddleRight);
        assert_eq!(move_cursor(Position::MiddleRight, 0, 1), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, -1, 0), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, 1, 0), Position::MiddleLeft);
    }
}
