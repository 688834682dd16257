//! Pixel rendering for the game panel.
//!
//! The renderer reads a [`Playfield`](tetris_panel_core::Playfield) and issues
//! draw calls against a [`Canvas`]. It does not know where the pixels end up:
//!
//! - [`PixelSurface`]: an in-memory RGB raster (what the terminal front-end presents)
//! - [`DrawRecorder`]: keeps the calls as values, handy for checking what was drawn
//!
//! # Example
//!
//! ```
//! use tetris_panel_core::{GameConfig, Tetris};
//! use tetris_panel_render::{GamePanel, PixelSurface};
//!
//! let mut game = Tetris::new(GameConfig::default());
//! game.start();
//!
//! let panel = GamePanel::new(4);
//! let (w, h) = panel.preferred_size(&game);
//! let mut surface = PixelSurface::new(w, h);
//! panel.paint(&game, None, &mut surface);
//!
//! assert_eq!((surface.width(), surface.height()), (40, 80));
//! ```

pub mod canvas;
pub mod panel;
pub mod surface;

pub use tetris_panel_core as core;
pub use tetris_panel_types as types;

pub use canvas::{Canvas, DrawCall, DrawRecorder};
pub use panel::{GamePanel, OverlayBand};
pub use surface::PixelSurface;
