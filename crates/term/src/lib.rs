//! Terminal front-end for the game panel.
//!
//! The game is painted into pixels by `tetris-panel-render`; this crate folds
//! those pixels into half-block glyphs, adds the border, side panel, overlay
//! text and menu, and flushes the result to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Only write the cells that changed between frames
//! - Keep per-frame work allocation-free once buffers are sized

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetris_panel_core as core;
pub use tetris_panel_render as render;
pub use tetris_panel_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{BoardFrame, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
