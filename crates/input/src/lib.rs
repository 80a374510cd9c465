//! Input module - key mapping and the board cursor
//!
//! Translates crossterm key events into game actions and tracks the
//! highlighted cell used for keyboard placement.

pub mod cursor;
pub mod map;

pub use cursor::Cursor;
pub use map::{handle_key_event, handle_prompt_key, should_quit};
