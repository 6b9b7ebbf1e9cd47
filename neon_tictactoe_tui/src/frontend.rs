//! Collaborators the terminal hands to the game controller.

use std::time::{Duration, Instant};

use neon_tictactoe::{Announce, Confirm, ConfirmRequest, Confirmation, Outcome, Render, Snapshot};
use tracing::{debug, info};

/// Keeps the latest frame for the draw loop.
#[derive(Debug, Default)]
pub struct FrameModel {
    latest: Option<Snapshot>,
    frames: u64,
}

impl FrameModel {
    /// Last snapshot received.
    pub fn latest(&self) -> Option<&Snapshot> {
        self.latest.as_ref()
    }
}

impl Render for FrameModel {
    fn render(&mut self, snapshot: &Snapshot) {
        self.frames += 1;
        debug!(frame = self.frames, moves = snapshot.moves, "Frame received");
        self.latest = Some(snapshot.clone());
    }
}

/// Defers every question to the on-screen dialog.
#[derive(Debug, Default, Clone, Copy)]
pub struct ForegroundConfirm;

impl Confirm for ForegroundConfirm {
    fn confirm(&mut self, request: ConfirmRequest) -> Confirmation {
        debug!(?request, "Opening confirmation dialog");
        Confirmation::Deferred
    }
}

/// Result banner shown a short while after a round ends.
#[derive(Debug)]
pub struct Banner {
    delay: Duration,
    shown: Option<(Outcome, Instant)>,
}

impl Banner {
    /// Creates a banner that waits `delay` before showing.
    pub fn new(delay: Duration) -> Self {
        Self { delay, shown: None }
    }

    /// Outcome to display at `now`, once the delay has passed.
    pub fn visible_at(&self, now: Instant) -> Option<Outcome> {
        self.shown
            .filter(|(_, at)| now.saturating_duration_since(*at) >= self.delay)
            .map(|(outcome, _)| outcome)
    }

    /// Hides the banner.
    pub fn clear(&mut self) {
        self.shown = None;
    }
}

impl Announce for Banner {
    fn announce(&mut self, outcome: Outcome) {
        info!(%outcome, "Round finished");
        self.shown = Some((outcome, Instant::now()));
    }
}
