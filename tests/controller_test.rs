//! Collaborator wiring: rendering, confirmation gating and announcements.

use std::cell::RefCell;
use std::rc::Rc;

use neon_tictactoe::{
    CommandOutcome, Confirm, ConfirmRequest, Confirmation, GameController, Outcome,
    PlaceOutcome, Player, Position, Rejection, Silent, Snapshot, UndoOutcome,
};

/// Answers from a script and remembers what it was asked.
#[derive(Debug, Default)]
struct ScriptedConfirm {
    answers: Vec<Confirmation>,
    asked: Vec<ConfirmRequest>,
}

impl ScriptedConfirm {
    fn answering(answers: &[Confirmation]) -> Self {
        Self {
            answers: answers.iter().rev().copied().collect(),
            asked: Vec::new(),
        }
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&mut self, request: ConfirmRequest) -> Confirmation {
        self.asked.push(request);
        self.answers.pop().unwrap_or(Confirmation::Declined)
    }
}

fn x_wins_top_row<R, C, A>(game: &mut GameController<R, C, A>)
where
    R: neon_tictactoe::Render,
    C: Confirm,
    A: neon_tictactoe::Announce,
{
    for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
        game.place(row, col).expect("on board");
    }
}

#[test]
fn test_renders_on_construction_and_after_each_mutation() {
    let frames: Rc<RefCell<Vec<Snapshot>>> = Rc::default();
    let sink = Rc::clone(&frames);
    let mut game = GameController::new(
        move |s: &Snapshot| sink.borrow_mut().push(s.clone()),
        true,
        Silent,
    );
    assert_eq!(frames.borrow().len(), 1);

    game.place(1, 1).expect("on board");
    game.place(1, 1).expect("on board"); // ignored, no frame
    game.undo();
    game.undo(); // nothing to undo, no frame

    let frames = frames.borrow();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[1].moves, 1);
    assert_eq!(frames[1].to_move, Player::O);
    assert!(frames[1].can_undo);
    assert_eq!(frames[2].moves, 0);
    assert_eq!(frames[2].to_move, Player::X);
}

#[test]
fn test_winning_frame_carries_line() {
    let last: Rc<RefCell<Option<Snapshot>>> = Rc::default();
    let sink = Rc::clone(&last);
    let mut game = GameController::new(
        move |s: &Snapshot| *sink.borrow_mut() = Some(s.clone()),
        true,
        Silent,
    );
    x_wins_top_row(&mut game);

    let frame = last.borrow().clone().expect("rendered");
    assert_eq!(frame.outcome, Some(Outcome::Winner(Player::X)));
    assert_eq!(
        frame.winning_line,
        vec![Position::TopLeft, Position::TopCenter, Position::TopRight]
    );
    assert_eq!(frame.score.x_wins(), 1);
    assert!(!frame.can_undo);
}

#[test]
fn test_announces_once_per_finished_round() {
    let heard: Rc<RefCell<Vec<Outcome>>> = Rc::default();
    let sink = Rc::clone(&heard);
    let mut game = GameController::new(Silent, true, move |o: Outcome| sink.borrow_mut().push(o));

    x_wins_top_row(&mut game);
    // Clicks after the win are ignored and stay silent.
    game.place(2, 0).expect("on board");
    game.place(1, 0).expect("on board");
    assert_eq!(*heard.borrow(), vec![Outcome::Winner(Player::X)]);

    game.new_round(false);
    for (row, col) in [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (2, 0),
        (2, 1),
        (1, 2),
        (2, 2),
    ] {
        game.place(row, col).expect("on board");
    }
    assert_eq!(
        *heard.borrow(),
        vec![Outcome::Winner(Player::X), Outcome::Draw]
    );
}

#[test]
fn test_declined_new_round_changes_nothing() {
    let mut game = GameController::new(Silent, false, Silent);
    x_wins_top_row(&mut game);
    let before = game.state().clone();

    assert_eq!(game.new_round(true), CommandOutcome::Declined);
    assert_eq!(game.state(), &before);
}

#[test]
fn test_new_round_without_confirmation_skips_the_prompt() {
    let mut game = GameController::new(Silent, ScriptedConfirm::default(), Silent);
    game.place(0, 0).expect("on board");

    assert_eq!(game.new_round(false), CommandOutcome::Applied);
    assert!(game.state().round().history().is_empty());
    assert!(game.confirmer_mut().asked.is_empty());
}

#[test]
fn test_reset_match_always_asks() {
    let confirm = ScriptedConfirm::answering(&[Confirmation::Declined, Confirmation::Granted]);
    let mut game = GameController::new(Silent, confirm, Silent);
    x_wins_top_row(&mut game);

    assert_eq!(game.reset_match(), CommandOutcome::Declined);
    assert_eq!(game.state().score().x_wins(), 1);

    assert_eq!(game.reset_match(), CommandOutcome::Applied);
    assert_eq!(game.state().score().rounds_played(), 0);
    assert!(game.state().round().history().is_empty());
    assert_eq!(
        game.confirmer_mut().asked,
        vec![ConfirmRequest::ResetMatch, ConfirmRequest::ResetMatch]
    );
}

#[test]
fn test_deferred_confirmation_blocks_until_answered() {
    let mut game = GameController::new(Silent, Confirmation::Deferred, Silent);
    game.place(0, 0).expect("on board");
    let before = game.state().clone();

    assert_eq!(game.new_round(true), CommandOutcome::AwaitingConfirmation);
    assert_eq!(game.pending_confirmation(), Some(ConfirmRequest::NewRound));
    assert_eq!(game.snapshot().pending, Some(ConfirmRequest::NewRound));
    assert_eq!(game.state(), &before);

    assert_eq!(
        game.place(1, 1).expect("on board"),
        PlaceOutcome::Rejected(Rejection::AwaitingConfirmation)
    );
    assert_eq!(
        game.undo(),
        UndoOutcome::Rejected(Rejection::AwaitingConfirmation)
    );
    assert_eq!(
        game.reset_match(),
        CommandOutcome::Rejected(Rejection::AwaitingConfirmation)
    );
    assert_eq!(game.state(), &before);

    assert_eq!(game.answer(true), CommandOutcome::Applied);
    assert_eq!(game.pending_confirmation(), None);
    assert!(game.state().round().history().is_empty());
}

#[test]
fn test_deferred_confirmation_answered_no() {
    let mut game = GameController::new(Silent, Confirmation::Deferred, Silent);
    x_wins_top_row(&mut game);
    let before = game.state().clone();

    assert_eq!(game.reset_match(), CommandOutcome::AwaitingConfirmation);
    assert_eq!(game.answer(false), CommandOutcome::Declined);
    assert_eq!(game.state(), &before);
    assert_eq!(
        game.answer(true),
        CommandOutcome::Rejected(Rejection::NothingPending)
    );
}

#[test]
fn test_snapshot_serializes_for_front_ends() {
    let mut game = GameController::new(Silent, true, Silent);
    game.place(1, 1).expect("on board");

    let json = serde_json::to_value(game.snapshot()).expect("serializable");
    assert_eq!(json["to_move"], "O");
    assert_eq!(json["moves"], 1);
    assert_eq!(json["cells"][1][1]["Occupied"], "X");
    assert_eq!(json["cells"][0][0], "Empty");
    assert_eq!(json["score"]["x_wins"], 0);
    assert!(json["pending"].is_null());

    let back: Snapshot = serde_json::from_value(json).expect("round trip");
    assert_eq!(back, game.snapshot());
}
