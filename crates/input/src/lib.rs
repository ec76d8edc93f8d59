//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`].

pub mod map;

pub use tui_bowling_types as types;

pub use map::{handle_key_event, should_quit};
