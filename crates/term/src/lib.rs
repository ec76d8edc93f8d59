//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: the pure scoreboard formatter,
//! a character framebuffer, a view that lays the whole screen out, and a
//! crossterm backend that flushes it.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep formatting pure so the scoreboard grid is unit-testable as text
//! - Confine real terminal I/O to [`renderer`]

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod scoreboard;

pub use tui_bowling_core as core;
pub use tui_bowling_types as types;

pub use fb::{Cell, FrameBuffer, Style};
pub use game_view::{GameView, RollFeedback, Viewport};
pub use renderer::{encode_into, TerminalRenderer};
pub use scoreboard::{frame_marks, render, render_marks_row, render_score_row, Mark};
