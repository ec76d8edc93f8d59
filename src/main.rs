//! Terminal bowling scorekeeper (default binary).
//!
//! It uses crossterm for input and a framebuffer-based renderer. The game is
//! turn-based, so the loop blocks on input and redraws after each event.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_bowling::core::BowlingGame;
use tui_bowling::input::{handle_key_event, should_quit};
use tui_bowling::term::{GameView, RollFeedback, TerminalRenderer, Viewport};
use tui_bowling::types::GameAction;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = BowlingGame::new();
    let view = GameView::default();
    let mut feedback: Option<RollFeedback> = None;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game, feedback, Viewport::new(w, h));
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    let accepted = game.apply_action(action);
                    feedback = match action {
                        GameAction::Bowl(pins) if accepted => {
                            Some(RollFeedback::Accepted(pins))
                        }
                        GameAction::Bowl(pins) => Some(RollFeedback::Rejected(pins)),
                        GameAction::Restart => None,
                    };
                }
            }
            Event::Resize(..) => {
                // Loop head re-renders at the new size.
            }
            _ => {}
        }
    }
}
