//! Frame scoring - per-frame breakdown with strike/spare lookahead.
//!
//! The scorer consumes the roll log front-to-back, one frame at a time.
//! Strike and spare scores depend on rolls that belong to later frames, so
//! a frame's score can resolve retroactively; deriving everything fresh
//! from the log makes that the natural case instead of a cache-invalidation
//! problem.

use tui_bowling_types::{Roll, FRAME_COUNT, PINS_PER_FRAME};

/// One frame's derived breakdown: roll slots, score, and running total.
///
/// Pending values are `None`. A score stays pending until every roll it
/// depends on exists in the log (for frame 10, until the game is complete);
/// a cumulative total stays pending until its own score and the previous
/// cumulative are both known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRecord {
    /// Frame number, 1-10.
    pub number: u8,
    /// Roll slots. Frames 1-9 use the first two (after a strike, slot 2
    /// holds a zero-pin display placeholder); frame 10 may use all three.
    pub rolls: [Option<Roll>; 3],
    /// This frame's score, once fully determined.
    pub score: Option<u16>,
    /// Running total through this frame, once determined.
    pub cumulative: Option<u16>,
}

impl FrameRecord {
    fn empty(number: u8) -> Self {
        Self {
            number,
            rolls: [None; 3],
            score: None,
            cumulative: None,
        }
    }

    /// Whether this frame opened with a strike.
    pub fn is_strike(&self) -> bool {
        self.rolls[0].is_some_and(Roll::is_strike)
    }

    /// Whether this frame's first two rolls make a spare (strike excluded).
    pub fn is_spare(&self) -> bool {
        match (self.rolls[0], self.rolls[1]) {
            (Some(a), Some(b)) if !a.is_strike() => {
                a.pins() + b.pins() == PINS_PER_FRAME
            }
            _ => false,
        }
    }
}

fn lookahead(rolls: &[Roll], index: usize) -> u16 {
    rolls.get(index).map_or(0, |r| r.pins() as u16)
}

/// Replay the log into the ten frame records.
///
/// `complete` gates the tenth frame's score: its slot sum is reported only
/// once the game has ended, even when enough rolls exist arithmetically.
pub fn derive_frames(rolls: &[Roll], complete: bool) -> [FrameRecord; FRAME_COUNT as usize] {
    let mut frames: [FrameRecord; FRAME_COUNT as usize] =
        std::array::from_fn(|i| FrameRecord::empty(i as u8 + 1));

    let mut i = 0usize;
    for frame in frames.iter_mut().take(FRAME_COUNT as usize - 1) {
        if i >= rolls.len() {
            break;
        }
        let r1 = rolls[i];
        frame.rolls[0] = Some(r1);

        if r1.is_strike() {
            // Display placeholder only; scores are computed from the log,
            // never read back from slots.
            frame.rolls[1] = Some(Roll::ZERO);
            // Speculative sum treats absent bonus rolls as 0, but the score
            // is reported only once both bonus rolls actually exist.
            if i + 2 < rolls.len() {
                let bonus = lookahead(rolls, i + 1) + lookahead(rolls, i + 2);
                frame.score = Some(PINS_PER_FRAME as u16 + bonus);
            }
            i += 1;
        } else if i + 1 < rolls.len() {
            let r2 = rolls[i + 1];
            frame.rolls[1] = Some(r2);
            let pair = r1.pins() as u16 + r2.pins() as u16;
            if pair == PINS_PER_FRAME as u16 {
                if i + 2 < rolls.len() {
                    frame.score = Some(PINS_PER_FRAME as u16 + lookahead(rolls, i + 2));
                }
            } else {
                frame.score = Some(pair);
            }
            i += 2;
        } else {
            // Frame in progress: one roll down, second pending.
            i += 1;
        }
    }

    let tenth = &mut frames[FRAME_COUNT as usize - 1];
    for slot in tenth.rolls.iter_mut() {
        if i >= rolls.len() {
            break;
        }
        *slot = Some(rolls[i]);
        i += 1;
    }
    if complete {
        let sum: u16 = tenth
            .rolls
            .iter()
            .flatten()
            .map(|r| r.pins() as u16)
            .sum();
        tenth.score = Some(sum);
    }

    let mut running: Option<u16> = Some(0);
    for frame in frames.iter_mut() {
        frame.cumulative = match (running, frame.score) {
            (Some(total), Some(score)) => Some(total + score),
            _ => None,
        };
        running = frame.cumulative;
    }

    frames
}
