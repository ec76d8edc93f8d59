//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental vocabulary used throughout the
//! application. All types are pure data structures with no external
//! dependencies, making them usable in any context (core logic, UI
//! rendering, tests).
//!
//! # Game Dimensions
//!
//! Standard ten-pin bowling:
//!
//! - **Frames**: 10 per game (frames 1-9 allow at most two rolls, frame 10
//!   allows up to three)
//! - **Pins**: 10 per frame
//! - **Rolls**: at most 21 per game (nine two-roll frames plus a three-roll
//!   tenth frame)
//!
//! # Examples
//!
//! ```
//! use tui_bowling_types::{GameAction, Roll, FRAME_COUNT, PINS_PER_FRAME};
//!
//! // A validated pin count
//! let roll = Roll::new(7).unwrap();
//! assert_eq!(roll.pins(), 7);
//! assert!(!roll.is_strike());
//!
//! // Out-of-range counts never become rolls
//! assert_eq!(Roll::new(11), None);
//!
//! // Game dimensions
//! assert_eq!(FRAME_COUNT, 10);
//! assert_eq!(PINS_PER_FRAME, 10);
//!
//! // An input action
//! let action = GameAction::Bowl(10);
//! assert_eq!(action, GameAction::Bowl(10));
//! ```

/// Number of frames in a game (10)
pub const FRAME_COUNT: u8 = 10;

/// The final frame number, which allows up to three rolls
pub const FINAL_FRAME: u8 = 10;

/// Pins standing at the start of every frame (10)
pub const PINS_PER_FRAME: u8 = 10;

/// Maximum rolls in a game: nine two-roll frames plus a three-roll tenth
pub const MAX_ROLLS: usize = 21;

/// A single validated roll: the number of pins knocked down, in `[0, 10]`.
///
/// Construction is fallible; an out-of-range count never becomes a `Roll`.
/// "Not yet rolled" is expressed as `Option<Roll>::None` at use sites, never
/// as a sentinel value inside the type.
///
/// # Examples
///
/// ```
/// use tui_bowling_types::Roll;
///
/// assert_eq!(Roll::new(0).map(|r| r.pins()), Some(0));
/// assert_eq!(Roll::new(10).map(|r| r.pins()), Some(10));
/// assert_eq!(Roll::new(11), None);
/// assert!(Roll::new(10).unwrap().is_strike());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Roll(u8);

impl Roll {
    /// A zero-pin roll (gutter ball).
    pub const ZERO: Roll = Roll(0);

    /// An all-pins roll (strike when first in a frame).
    pub const ALL: Roll = Roll(PINS_PER_FRAME);

    /// Validate a pin count. Returns `None` outside `[0, 10]`.
    pub fn new(pins: u8) -> Option<Self> {
        if pins <= PINS_PER_FRAME {
            Some(Roll(pins))
        } else {
            None
        }
    }

    /// The number of pins this roll knocked down.
    pub const fn pins(self) -> u8 {
        self.0
    }

    /// Whether this roll took all ten pins.
    pub const fn is_strike(self) -> bool {
        self.0 == PINS_PER_FRAME
    }
}

/// Game actions that can be applied to the game facade.
///
/// These are produced by the input layer and consumed by
/// `BowlingGame::apply_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Submit a roll knocking down this many pins (validated by the core).
    Bowl(u8),
    /// Reset to a fresh game with an empty roll log.
    Restart,
}
