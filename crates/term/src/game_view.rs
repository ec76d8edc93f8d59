//! GameView: lays the whole screen out into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::BowlingGame;
use crate::fb::{FrameBuffer, Style};
use crate::scoreboard;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// What happened to the most recent submission, echoed on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollFeedback {
    Accepted(u8),
    Rejected(u8),
}

/// Renders a [`BowlingGame`] into a framebuffer.
///
/// Screen layout, top-anchored with a fixed left margin:
/// title, scoreboard grid, prompt/status line, feedback line, key help.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    margin_x: u16,
    margin_y: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            margin_x: 2,
            margin_y: 1,
        }
    }
}

impl GameView {
    pub fn new(margin_x: u16, margin_y: u16) -> Self {
        Self { margin_x, margin_y }
    }

    /// Render the current game into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across redraws and only resize when
    /// the terminal size changes.
    pub fn render_into(
        &self,
        game: &BowlingGame,
        feedback: Option<RollFeedback>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let x = self.margin_x;
        let mut y = self.margin_y;

        fb.put_str(x, y, "TEN-PIN BOWLING", Style::BOLD);
        y = y.saturating_add(2);

        let frames = game.frame_records();
        fb.put_str(x, y, &scoreboard::render_marks_row(&frames), Style::default());
        y = y.saturating_add(1);
        fb.put_str(x, y, &scoreboard::render_score_row(&frames), Style::default());
        y = y.saturating_add(2);

        fb.put_str(x, y, &status_line(game), Style::default());
        y = y.saturating_add(1);

        if let Some(fbk) = feedback {
            fb.put_str(x, y, &feedback_line(fbk), Style::default());
        }
        y = y.saturating_add(2);

        fb.put_str(
            x,
            y,
            "0-9 pins  x strike  r restart  q quit",
            Style::DIM,
        );
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        game: &BowlingGame,
        feedback: Option<RollFeedback>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, feedback, viewport, &mut fb);
        fb
    }
}

fn status_line(game: &BowlingGame) -> String {
    if game.is_complete() {
        match game.final_score() {
            Some(total) => format!("Game over. Final score: {total}. Press r to play again."),
            None => "Game over. Press r to play again.".to_string(),
        }
    } else {
        let turn = game.turn_state();
        format!(
            "Frame {}, roll {}. Knock down up to {} pins.",
            turn.frame, turn.roll, turn.max_pins
        )
    }
}

fn feedback_line(feedback: RollFeedback) -> String {
    match feedback {
        RollFeedback::Accepted(pins) => format!("Rolled {pins}."),
        RollFeedback::Rejected(pins) => format!("Can't roll {pins} here."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(game: &BowlingGame, feedback: Option<RollFeedback>) -> FrameBuffer {
        GameView::default().render(game, feedback, Viewport::new(60, 12))
    }

    fn row(fb: &FrameBuffer, y: u16) -> String {
        fb.row_text(y)
    }

    #[test]
    fn fresh_game_shows_title_grid_and_prompt() {
        let game = BowlingGame::new();
        let fb = rendered(&game, None);

        assert_eq!(row(&fb, 1), "  TEN-PIN BOWLING");
        assert_eq!(row(&fb, 3), "  |  |  |  |  |  |  |  |  |  |   |");
        assert_eq!(row(&fb, 6), "  Frame 1, roll 1. Knock down up to 10 pins.");
        assert!(row(&fb, 9).contains("r restart"));
    }

    #[test]
    fn title_is_bold_and_help_is_dim() {
        let game = BowlingGame::new();
        let fb = rendered(&game, None);

        assert_eq!(fb.get(2, 1).map(|c| c.style), Some(Style::BOLD));
        assert_eq!(fb.get(2, 9).map(|c| c.style), Some(Style::DIM));
    }

    #[test]
    fn pin_cap_appears_in_the_prompt() {
        let mut game = BowlingGame::new();
        assert!(game.submit(7));
        let fb = rendered(&game, None);

        assert_eq!(row(&fb, 6), "  Frame 1, roll 2. Knock down up to 3 pins.");
    }

    #[test]
    fn feedback_echoes_accepted_and_rejected_rolls() {
        let mut game = BowlingGame::new();
        game.submit(7);
        let fb = rendered(&game, Some(RollFeedback::Accepted(7)));
        assert_eq!(row(&fb, 7), "  Rolled 7.");

        let fb = rendered(&game, Some(RollFeedback::Rejected(9)));
        assert_eq!(row(&fb, 7), "  Can't roll 9 here.");
    }

    #[test]
    fn completed_game_shows_the_final_score() {
        let mut game = BowlingGame::new();
        for _ in 0..12 {
            game.submit(10);
        }
        let fb = rendered(&game, None);

        assert_eq!(
            row(&fb, 6),
            "  Game over. Final score: 300. Press r to play again."
        );
    }

    #[test]
    fn grid_renders_marks_from_the_game() {
        let mut game = BowlingGame::new();
        game.submit(5);
        game.submit(5);
        game.submit(10);
        let fb = rendered(&game, None);

        assert!(row(&fb, 3).starts_with("  |5/|X |"));
        assert!(row(&fb, 4).starts_with("  | 20|   |"));
    }
}
