//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the bowling rules, the roll log, and everything
//! derived from it. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: every derived value is a pure function of the roll log
//! - **Testable**: comprehensive unit tests for all scoring rules
//! - **Portable**: can run in any environment (terminal, headless, tests)
//!
//! # Module Structure
//!
//! - [`rolls`]: the append-only roll log, the game's only persistent state
//! - [`turn`]: derives the next frame/roll position and game completion
//! - [`frames`]: derives per-frame scores with strike/spare lookahead
//! - [`game`]: the `BowlingGame` facade owning the log and its validation
//!
//! # Scoring Rules
//!
//! Standard ten-pin scoring:
//!
//! - **Strike**: all ten pins on the first roll; scores 10 plus the next two
//!   rolls (which belong to later frames)
//! - **Spare**: all ten pins across a frame's two rolls; scores 10 plus the
//!   next roll
//! - **Open frame**: fewer than ten pins across two rolls; scores their sum
//! - **Tenth frame**: up to three rolls; a third roll is earned by a strike
//!   or spare in the first two
//!
//! A frame's score is exposed only once every roll it depends on has
//! actually been bowled; until then it is pending (`None`), as is every
//! cumulative total at or after the gap.
//!
//! # Design
//!
//! Nothing is cached: turn position and frame scores are recomputed by
//! replaying the whole log on every query. A replay is at most 21 rolls,
//! and strike/spare lookahead makes retroactive score resolution the norm
//! rather than the exception, so incremental state would only add ways to
//! be wrong.
//!
//! # Example
//!
//! ```
//! use tui_bowling_core::BowlingGame;
//!
//! let mut game = BowlingGame::new();
//! assert!(game.submit(7));
//! assert!(game.submit(3)); // spare
//! assert!(game.submit(4));
//!
//! let frames = game.frame_records();
//! assert_eq!(frames[0].score, Some(14)); // 10 + 4 bonus
//! assert!(!game.is_complete());
//! ```

pub mod frames;
pub mod game;
pub mod rolls;
pub mod turn;

pub use frames::{derive_frames, FrameRecord};
pub use game::BowlingGame;
pub use rolls::RollLog;
pub use turn::{derive_turn, TurnState};
