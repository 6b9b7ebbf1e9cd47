//! Application state and logic.

use std::time::Instant;

use neon_tictactoe::{
    CommandOutcome, GameController, Outcome, PlaceOutcome, Position, Snapshot, UndoOutcome,
};
use ratatui::layout::Rect;
use tracing::{debug, instrument};

use crate::config::TuiConfig;
use crate::frontend::{Banner, ForegroundConfirm, FrameModel};
use crate::input::{Action, move_cursor};

type Controller = GameController<FrameModel, ForegroundConfirm, Banner>;

/// Main application state.
pub struct App {
    game: Controller,
    cursor: Position,
    confirm_new_round: bool,
    cells: Vec<(Position, Rect)>,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            game: GameController::new(
                FrameModel::default(),
                ForegroundConfirm,
                Banner::new(config.announce_delay()),
            ),
            cursor: Position::Center,
            confirm_new_round: *config.confirm_new_round(),
            cells: Vec::new(),
            status_message: "X to move".to_string(),
            should_quit: false,
        }
    }

    /// Latest frame handed to the renderer.
    pub fn frame(&self) -> Snapshot {
        self.game
            .renderer()
            .latest()
            .cloned()
            .unwrap_or_else(|| self.game.snapshot())
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Outcome for the result banner, once its delay has passed.
    pub fn banner(&self, now: Instant) -> Option<Outcome> {
        self.game.announcer().visible_at(now)
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records where each cell was drawn, for mouse clicks.
    pub fn set_cell_areas(&mut self, cells: Vec<(Position, Rect)>) {
        self.cells = cells;
    }

    /// Whether a confirmation dialog is open.
    pub fn dialog_open(&self) -> bool {
        self.game.pending_confirmation().is_some()
    }

    /// Handles a left click at terminal cell (`column`, `row`).
    pub fn click(&mut self, column: u16, row: u16) {
        let hit = self.cells.iter().find(|(_, area)| {
            column >= area.x
                && column < area.x.saturating_add(area.width)
                && row >= area.y
                && row < area.y.saturating_add(area.height)
        });

        if let Some((pos, _)) = hit.copied() {
            if self.dialog_open() {
                debug!(?pos, "Click ignored while dialog is open");
                return;
            }
            self.cursor = pos;
            self.handle(Action::PlaceAtCursor);
        }
    }

    /// Applies one user action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::MoveCursor(d_row, d_col) => {
                self.cursor = move_cursor(self.cursor, d_row, d_col);
            }
            Action::PlaceAtCursor => self.place(self.cursor),
            Action::PlaceAt(pos) => {
                self.cursor = pos;
                self.place(pos);
            }
            Action::Undo => match self.game.undo() {
                UndoOutcome::Undone(mv) => {
                    self.cursor = mv.position();
                    self.status_message = format!("Took back {}. {} to move", mv, mv.player());
                }
                UndoOutcome::Rejected(reason) => self.status_message = reason.to_string(),
            },
            Action::NewRound => {
                let outcome = self.game.new_round(self.confirm_new_round);
                self.after_command(outcome);
            }
            Action::ResetMatch => {
                let outcome = self.game.reset_match();
                self.after_command(outcome);
            }
            Action::Answer(yes) => {
                let outcome = self.game.answer(yes);
                self.after_command(outcome);
            }
            Action::Quit => self.should_quit = true,
        }
    }

    fn place(&mut self, pos: Position) {
        match self.game.place_at(pos) {
            PlaceOutcome::Continue { next } => {
                self.status_message = format!("{} to move", next);
            }
            PlaceOutcome::Won { winner, .. } => {
                self.status_message = format!("{} wins! Press 'r' for a new round", winner);
            }
            PlaceOutcome::Drawn => {
                self.status_message = "Draw! Press 'r' for a new round".to_string();
            }
            PlaceOutcome::Rejected(reason) => self.status_message = reason.to_string(),
        }
    }

    fn after_command(&mut self, outcome: CommandOutcome) {
        debug!(?outcome, "Command finished");
        self.status_message = match outcome {
            CommandOutcome::Applied => {
                self.game.announcer_mut().clear();
                self.cursor = Position::Center;
                "New round. X to move".to_string()
            }
            CommandOutcome::Declined => "Cancelled".to_string(),
            CommandOutcome::AwaitingConfirmation => "Answer y or n".to_string(),
            CommandOutcome::Rejected(reason) => reason.to_string(),
        };
    }
}
