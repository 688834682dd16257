//! GamePanel: paints a playfield onto a [`Canvas`].
//!
//! Every cell is a flat square with a one-pixel bevel: the top and left edges
//! use a brighter shade of the cell color, the bottom and right edges a darker
//! one. The panel only reads the game; it never mutates it.

use crate::canvas::Canvas;
use crate::core::{Overlay, Playfield};
use crate::types::{Rgb, DEFAULT_CELL_SIZE};

/// Smallest cell that still has a fill pixel inside its bevel.
const MIN_CELL_SIZE: u32 = 2;

/// Vertical placement of an overlay band, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayBand {
    pub top: u32,
    pub height: u32,
    /// Height of one text line; line `i` is centered on `top + line_height * (i + 1)`.
    pub line_height: u32,
}

impl OverlayBand {
    /// Pixel row at the vertical center of text line `index`.
    pub fn line_center(&self, index: usize) -> u32 {
        self.top + self.line_height * (index as u32 + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GamePanel {
    cell_size: u32,
    background: Rgb,
}

impl Default for GamePanel {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SIZE)
    }
}

impl GamePanel {
    /// Panel drawing `cell_size x cell_size` pixel cells (at least 2).
    pub fn new(cell_size: u32) -> Self {
        Self {
            cell_size: cell_size.max(MIN_CELL_SIZE),
            background: Rgb::new(30, 30, 40),
        }
    }

    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Pixel size `(width, height)` of the surface a playfield needs.
    pub fn preferred_size<P: Playfield + ?Sized>(&self, field: &P) -> (u32, u32) {
        (
            self.cell_size * u32::from(field.columns()),
            self.cell_size * u32::from(field.rows()),
        )
    }

    /// Draw everything: background, locked cells, the falling shape and
    /// the overlay band if one is visible.
    pub fn paint<P, C>(&self, field: &P, overlay: Option<&Overlay>, canvas: &mut C)
    where
        P: Playfield + ?Sized,
        C: Canvas + ?Sized,
    {
        canvas.clear(self.background);

        self.paint_game_board(field, canvas);
        if field.current_shape().is_some() {
            self.paint_current_shape(field, canvas);
        }

        if let Some(overlay) = overlay {
            let (width, _) = self.preferred_size(field);
            self.paint_overlay(overlay, width, canvas);
        }
    }

    /// Paint every occupied board cell.
    pub fn paint_game_board<P, C>(&self, field: &P, canvas: &mut C)
    where
        P: Playfield + ?Sized,
        C: Canvas + ?Sized,
    {
        for row in 0..field.rows() {
            for column in 0..field.columns() {
                if let Some(color) = field.cell_at(row, column) {
                    self.draw_single_piece(canvas, row, column, color);
                }
            }
        }
    }

    /// Paint the falling shape. Without one this logs a warning and draws nothing.
    pub fn paint_current_shape<P, C>(&self, field: &P, canvas: &mut C)
    where
        P: Playfield + ?Sized,
        C: Canvas + ?Sized,
    {
        let Some(shape) = field.current_shape() else {
            log::warn!("paint_current_shape: no current shape to draw");
            return;
        };

        for (x, y) in shape.cells() {
            if x < 0 || y < 0 {
                continue;
            }
            self.draw_single_piece(canvas, y as u16, x as u16, shape.color);
        }
    }

    /// Draw one bevelled cell at (row, column).
    pub fn draw_single_piece<C>(&self, canvas: &mut C, row: u16, column: u16, color: Rgb)
    where
        C: Canvas + ?Sized,
    {
        let size = self.cell_size as i32;
        let first_x = size * i32::from(column);
        let first_y = size * i32::from(row);
        let last_x = first_x + size - 1;
        let last_y = first_y + size - 1;

        canvas.fill_rect(first_x, first_y, self.cell_size - 1, self.cell_size - 1, color);

        let light = color.brighter();
        canvas.draw_line(first_x, first_y, last_x, first_y, light);
        canvas.draw_line(first_x, first_y + 1, first_x, last_y, light);

        let dark = color.darker();
        canvas.draw_line(last_x, first_y + 1, last_x, last_y - 1, dark);
        canvas.draw_line(first_x + 1, last_y, last_x, last_y, dark);
    }

    /// Where an overlay sits: two cells below the top, one cell per text line
    /// plus one cell of padding.
    pub fn overlay_band(&self, overlay: &Overlay) -> OverlayBand {
        OverlayBand {
            top: 2 * self.cell_size,
            height: self.cell_size * (overlay.lines.len() as u32 + 1),
            line_height: self.cell_size,
        }
    }

    /// Blend the overlay's translucent band across the full panel width.
    pub fn paint_overlay<C>(&self, overlay: &Overlay, width: u32, canvas: &mut C)
    where
        C: Canvas + ?Sized,
    {
        let band = self.overlay_band(overlay);
        canvas.blend_rect(0, band.top as i32, width, band.height, overlay.background);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCall, DrawRecorder};
    use crate::core::Board;

    #[test]
    fn cell_size_has_a_floor() {
        assert_eq!(GamePanel::new(0).cell_size(), 2);
        assert_eq!(GamePanel::new(24).cell_size(), 24);
    }

    #[test]
    fn preferred_size_is_columns_by_rows() {
        let panel = GamePanel::new(3);
        assert_eq!(panel.preferred_size(&Board::new(10, 20)), (30, 60));
    }

    #[test]
    fn single_piece_issues_fill_then_four_edges() {
        let panel = GamePanel::new(4);
        let mut rec = DrawRecorder::new();
        let color = Rgb::new(100, 100, 100);
        panel.draw_single_piece(&mut rec, 1, 2, color);

        let light = color.brighter();
        let dark = color.darker();
        assert_eq!(
            rec.calls(),
            &[
                DrawCall::FillRect {
                    x: 8,
                    y: 4,
                    width: 3,
                    height: 3,
                    color
                },
                DrawCall::Line {
                    x0: 8,
                    y0: 4,
                    x1: 11,
                    y1: 4,
                    color: light
                },
                DrawCall::Line {
                    x0: 8,
                    y0: 5,
                    x1: 8,
                    y1: 7,
                    color: light
                },
                DrawCall::Line {
                    x0: 11,
                    y0: 5,
                    x1: 11,
                    y1: 6,
                    color: dark
                },
                DrawCall::Line {
                    x0: 9,
                    y0: 7,
                    x1: 11,
                    y1: 7,
                    color: dark
                },
            ]
        );
    }

    #[test]
    fn overlay_band_scales_with_line_count() {
        let panel = GamePanel::new(2);
        let overlay = Overlay {
            kind: crate::core::OverlayKind::GameOver,
            lines: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            background: crate::types::Rgba::new(0, 0, 0, 0),
        };
        let band = panel.overlay_band(&overlay);
        assert_eq!((band.top, band.height), (4, 10));
        assert_eq!(band.line_center(0), 6);
        assert_eq!(band.line_center(3), 12);
    }
}
