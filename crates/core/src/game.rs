//! Game facade - owns the roll log and validates every mutation.

use tui_bowling_types::{GameAction, Roll, FINAL_FRAME, FRAME_COUNT, PINS_PER_FRAME};

use crate::frames::{derive_frames, FrameRecord};
use crate::rolls::RollLog;
use crate::turn::{derive_turn, TurnState};

/// The complete game: a roll log plus the validated append path.
///
/// Every read (`turn_state`, `frame_records`, `is_complete`) is a fresh
/// derivation from the log; `submit` is the single mutation. There is no
/// other state to get out of sync.
#[derive(Debug, Clone, Default)]
pub struct BowlingGame {
    rolls: RollLog,
}

impl BowlingGame {
    /// Create a new game with an empty roll log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit a roll. Returns `true` exactly when the log grew.
    ///
    /// Rejected without effect when:
    /// - `pins` is outside `[0, 10]`;
    /// - the game is already complete;
    /// - this is the second roll of frames 1-9 and the frame total would
    ///   exceed ten pins.
    ///
    /// Frame 10 has no pin-pair cap; its legality is enforced by the turn
    /// tracker ending the game instead.
    pub fn submit(&mut self, pins: u8) -> bool {
        let Some(roll) = Roll::new(pins) else {
            return false;
        };

        let turn = self.turn_state();
        if turn.complete {
            return false;
        }
        if turn.frame < FINAL_FRAME && turn.roll == 2 {
            // By construction the previous roll is the first roll of this
            // frame.
            if let Some(prev) = self.rolls.last() {
                if prev.pins() + roll.pins() > PINS_PER_FRAME {
                    return false;
                }
            }
        }

        self.rolls.push(roll)
    }

    /// Apply an input action. Returns `true` when it changed the game.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Bowl(pins) => self.submit(pins),
            GameAction::Restart => {
                *self = Self::new();
                true
            }
        }
    }

    /// True once all ten frames have been bowled out.
    pub fn is_complete(&self) -> bool {
        self.turn_state().complete
    }

    /// The next frame/roll position and pin cap.
    pub fn turn_state(&self) -> TurnState {
        derive_turn(self.rolls.as_slice())
    }

    /// The ten frame records: roll slots, scores, cumulative totals.
    pub fn frame_records(&self) -> [FrameRecord; FRAME_COUNT as usize] {
        derive_frames(self.rolls.as_slice(), self.is_complete())
    }

    /// The accepted rolls, in order.
    pub fn rolls(&self) -> &[Roll] {
        self.rolls.as_slice()
    }

    /// The final score, once the game is complete.
    pub fn final_score(&self) -> Option<u16> {
        self.frame_records()[FRAME_COUNT as usize - 1].cumulative
    }
}
