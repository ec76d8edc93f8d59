//! Integration tests for the full-screen view layout.

use tui_bowling::core::BowlingGame;
use tui_bowling::term::{GameView, RollFeedback, Viewport};

fn play(pins: &[u8]) -> BowlingGame {
    let mut game = BowlingGame::new();
    for &p in pins {
        assert!(game.submit(p), "roll of {p} was rejected mid-sequence");
    }
    game
}

#[test]
fn view_lays_out_grid_prompt_and_help() {
    let game = play(&[10, 7]);
    let view = GameView::default();
    let fb = view.render(&game, Some(RollFeedback::Accepted(7)), Viewport::new(60, 12));

    assert_eq!(fb.row_text(1), "  TEN-PIN BOWLING");
    assert!(fb.row_text(3).starts_with("  |X |7 |"));
    assert_eq!(
        fb.row_text(6),
        "  Frame 2, roll 2. Knock down up to 3 pins."
    );
    assert_eq!(fb.row_text(7), "  Rolled 7.");
    assert_eq!(fb.row_text(9), "  0-9 pins  x strike  r restart  q quit");
}

#[test]
fn rejected_roll_is_reported() {
    let game = play(&[7]);
    let view = GameView::default();
    let fb = view.render(&game, Some(RollFeedback::Rejected(8)), Viewport::new(60, 12));
    assert_eq!(fb.row_text(7), "  Can't roll 8 here.");
}

#[test]
fn finished_game_prompts_for_restart() {
    let game = play(&[10; 12]);
    let view = GameView::default();
    let fb = view.render(&game, None, Viewport::new(80, 12));
    assert_eq!(
        fb.row_text(6),
        "  Game over. Final score: 300. Press r to play again."
    );
}

#[test]
fn narrow_viewport_clips_without_panicking() {
    let game = play(&[5, 5, 10]);
    let view = GameView::default();
    let fb = view.render(&game, None, Viewport::new(10, 4));
    assert_eq!(fb.width(), 10);
    // Rows beyond the viewport are simply dropped.
    assert!(fb.row_text(3).len() <= 10);
}
