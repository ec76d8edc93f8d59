//! Scoreboard formatting: the fixed two-row textual grid.
//!
//! This module is pure (no I/O) and works entirely from derived
//! [`FrameRecord`]s, so the exact grid text is unit-testable.
//!
//! Layout:
//! - Marks row: ten `|`-delimited cells; frames 1-9 are two marks wide,
//!   frame 10 is three.
//! - Score row: ten `|`-delimited cells, each the cumulative total
//!   right-justified to three characters (three spaces while pending).

use tui_bowling_core::FrameRecord;
use tui_bowling_types::{Roll, FRAME_COUNT, PINS_PER_FRAME};

/// A single scoreboard mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Not yet rolled (renders as a space).
    Blank,
    /// Gutter: zero pins.
    Miss,
    /// All pins across the frame's two rolls.
    Spare,
    /// All pins on one roll.
    Strike,
    /// A partial count, 1-9.
    Pins(u8),
}

impl Mark {
    pub fn as_char(self) -> char {
        match self {
            Mark::Blank => ' ',
            Mark::Miss => '-',
            Mark::Spare => '/',
            Mark::Strike => 'X',
            Mark::Pins(n) => char::from_digit(n as u32, 10).unwrap_or('?'),
        }
    }
}

/// Render a roll on its own: X, -, or a digit.
fn roll_mark(roll: Option<Roll>) -> Mark {
    match roll {
        None => Mark::Blank,
        Some(r) if r.is_strike() => Mark::Strike,
        Some(r) if r.pins() == 0 => Mark::Miss,
        Some(r) => Mark::Pins(r.pins()),
    }
}

/// Render a second roll relative to the frame's first: spare-aware.
fn follow_up_mark(first: Roll, second: Option<Roll>) -> Mark {
    match second {
        None => Mark::Blank,
        Some(s) if first.pins() + s.pins() == PINS_PER_FRAME => Mark::Spare,
        Some(s) if s.pins() == 0 => Mark::Miss,
        Some(s) => Mark::Pins(s.pins()),
    }
}

/// The three mark positions for one frame (frames 1-9 leave the third blank).
pub fn frame_marks(frame: &FrameRecord) -> [Mark; 3] {
    let [r1, r2, r3] = frame.rolls;

    if frame.number < FRAME_COUNT {
        return match r1 {
            // Strike collapses the frame to one mark; the zero-pin
            // placeholder in slot 2 stays blank.
            Some(first) if first.is_strike() => [Mark::Strike, Mark::Blank, Mark::Blank],
            Some(first) => [roll_mark(r1), follow_up_mark(first, r2), Mark::Blank],
            None => [Mark::Blank; 3],
        };
    }

    // Frame 10: the second mark is spare-aware only when the first roll was
    // not a strike; the third always renders on its own.
    let second = match r1 {
        Some(first) if first.is_strike() => roll_mark(r2),
        Some(first) => follow_up_mark(first, r2),
        None => Mark::Blank,
    };
    [roll_mark(r1), second, roll_mark(r3)]
}

/// The marks row: `|5/|7-|X |...|X4/|`-style, frame 10 three marks wide.
pub fn render_marks_row(frames: &[FrameRecord; FRAME_COUNT as usize]) -> String {
    let mut row = String::with_capacity(40);
    row.push('|');
    for frame in frames {
        let marks = frame_marks(frame);
        row.push(marks[0].as_char());
        row.push(marks[1].as_char());
        if frame.number == FRAME_COUNT {
            row.push(marks[2].as_char());
        }
        row.push('|');
    }
    row
}

/// The cumulative-score row: ten three-character right-justified cells.
pub fn render_score_row(frames: &[FrameRecord; FRAME_COUNT as usize]) -> String {
    let mut row = String::with_capacity(48);
    row.push('|');
    for frame in frames {
        match frame.cumulative {
            Some(total) => row.push_str(&format!("{total:>3}")),
            None => row.push_str("   "),
        }
        row.push('|');
    }
    row
}

/// The full two-row scoreboard.
pub fn render(frames: &[FrameRecord; FRAME_COUNT as usize]) -> String {
    format!("{}\n{}", render_marks_row(frames), render_score_row(frames))
}
