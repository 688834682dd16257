//! Terminal Tetris with a bevelled pixel game panel (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them and adds the command line and the menu/game screen flow
//! used by the binary.

pub mod app;
pub mod cli;

pub use tetris_panel_core as core;
pub use tetris_panel_input as input;
pub use tetris_panel_render as render;
pub use tetris_panel_term as term;
pub use tetris_panel_types as types;

pub use app::{App, Flow, Screen};
pub use cli::Args;
