//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules, state management and the overlay state
//! machine. It has **no dependencies** on terminals or drawing, making it:
//!
//! - **Deterministic**: Same seed produces the same piece sequence
//! - **Testable**: Unit tests for every rule
//! - **Portable**: Any renderer can read it through [`Playfield`]
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid with collision checks and line clearing
//! - [`config`]: validated board size, speed and seed
//! - [`game`]: the [`Tetris`] game state, its tick and its commands
//! - [`overlay`]: paused / game-over overlay visibility
//! - [`pieces`]: tetromino shape tables and SRS rotation with wall kicks
//! - [`playfield`]: the read-only interface renderers draw from
//! - [`rng`]: 7-bag random piece generation
//! - [`scoring`]: classic line-clear scoring and gravity per level
//! - [`shape`]: the falling [`Shape`]
//!
//! # Example
//!
//! ```
//! use tetris_panel_core::{GameConfig, Playfield, Tetris};
//! use tetris_panel_core::types::GameCommand;
//!
//! let mut game = Tetris::new(GameConfig::default());
//! game.start();
//!
//! game.apply(GameCommand::MoveRight);
//! game.apply(GameCommand::RotateCw);
//! game.apply(GameCommand::HardDrop);
//!
//! assert_eq!(game.board().occupied_count(), 4);
//! assert!(game.current_shape().is_some());
//! ```
//!
//! # Timing
//!
//! Call [`Tetris::tick`] every frame with the elapsed milliseconds
//! (the host uses a fixed 16ms step).

pub mod board;
pub mod config;
pub mod game;
pub mod overlay;
pub mod pieces;
pub mod playfield;
pub mod rng;
pub mod scoring;
pub mod shape;

pub use tetris_panel_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, GameConfig};
pub use game::{GameEvent, Tetris};
pub use overlay::{Overlay, OverlayController, OverlayKind};
pub use pieces::{get_shape, try_rotate};
pub use playfield::Playfield;
pub use rng::{PieceQueue, SimpleRng};
pub use shape::Shape;
