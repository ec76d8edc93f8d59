//! Turn tracking - derives "whose roll is next" from the roll log.
//!
//! The derivation replays frame/roll position transitions from the start of
//! the log. Frames 1-9 collapse to a single roll on a strike; frame 10 earns
//! a third roll on a strike or spare and ends the game otherwise.

use tui_bowling_types::{Roll, FINAL_FRAME, PINS_PER_FRAME};

/// The next position to bowl, derived from the roll log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnState {
    /// Current frame, 1-10. Stays 10 once the game is complete.
    pub frame: u8,
    /// Roll within the frame: 1, 2, or (frame 10 only) 3.
    pub roll: u8,
    /// Maximum pins legally rollable next. `10 - first roll` at roll 2 of
    /// frames 1-9; 10 everywhere else (frame 10's own legality is enforced
    /// by completion, not by this cap).
    pub max_pins: u8,
    /// True exactly when position advancement has walked past frame 10.
    pub complete: bool,
}

/// Replay the log to find the next frame/roll position.
pub fn derive_turn(rolls: &[Roll]) -> TurnState {
    let mut frame: u8 = 1;
    let mut roll: u8 = 1;
    // First roll of the frame in progress, for the pin cap and the
    // tenth-frame third-roll rule.
    let mut first: Option<Roll> = None;

    for &r in rolls {
        if frame > FINAL_FRAME {
            // Over-submission past completion; the facade rejects this, but
            // stay well-defined for raw logs.
            break;
        }
        if frame < FINAL_FRAME {
            if roll == 1 {
                if r.is_strike() {
                    frame += 1;
                } else {
                    first = Some(r);
                    roll = 2;
                }
            } else {
                frame += 1;
                roll = 1;
                first = None;
            }
        } else {
            match roll {
                1 => {
                    first = Some(r);
                    roll = 2;
                }
                2 => {
                    let pins_first = first.map_or(0, Roll::pins);
                    if pins_first == PINS_PER_FRAME || pins_first + r.pins() == PINS_PER_FRAME {
                        roll = 3;
                    } else {
                        frame = FINAL_FRAME + 1;
                    }
                }
                _ => {
                    frame = FINAL_FRAME + 1;
                }
            }
        }
    }

    let complete = frame > FINAL_FRAME;
    let max_pins = match first {
        Some(r) if !complete && frame < FINAL_FRAME && roll == 2 => PINS_PER_FRAME - r.pins(),
        _ => PINS_PER_FRAME,
    };

    TurnState {
        frame: frame.min(FINAL_FRAME),
        roll: roll.min(3),
        max_pins,
        complete,
    }
}
