//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameCommand`]s. There is no
//! timing logic here: terminal auto-repeat arrives as ordinary presses and is
//! forwarded as such.

pub mod map;

pub use tetris_panel_types as types;

pub use map::{is_press, map_key, should_quit};
