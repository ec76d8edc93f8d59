//! The roll log - the game's only persistent state.

use arrayvec::ArrayVec;
use tui_bowling_types::{Roll, MAX_ROLLS};

/// Ordered, append-only log of accepted rolls.
///
/// Everything else in the game (turn position, frame scores, the rendered
/// scoreboard) is recomputed from this log on demand. The log never shrinks
/// or reorders, and only grows through the facade's validated submit path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollLog {
    rolls: ArrayVec<Roll, MAX_ROLLS>,
}

impl RollLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    /// The most recently appended roll, if any.
    pub fn last(&self) -> Option<Roll> {
        self.rolls.last().copied()
    }

    pub fn as_slice(&self) -> &[Roll] {
        &self.rolls
    }

    /// Append a roll. Returns `false` (log unchanged) only at the 21-roll
    /// capacity, which the turn tracker prevents from being reached through
    /// the validated submit path.
    pub fn push(&mut self, roll: Roll) -> bool {
        self.rolls.try_push(roll).is_ok()
    }
}
