//! GameView: presents the painted game panel in a terminal framebuffer.
//!
//! The board is painted by [`GamePanel`] into a [`PixelSurface`], then each
//! pair of pixel rows is folded into one row of half-block glyphs (`▀` with
//! the upper pixel as foreground and the lower one as background). One pixel
//! is one terminal column wide, so a cell of size 2 is a 2x1 block of glyphs.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Overlay, Playfield, Tetris};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::render::{GamePanel, PixelSurface};

const UPPER_HALF: char = '▀';

const BORDER: CellStyle = CellStyle::colors(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const LABEL: CellStyle = CellStyle {
    fg: Rgb::new(220, 220, 220),
    bg: Rgb::new(0, 0, 0),
    bold: true,
    dim: false,
};
const VALUE: CellStyle = CellStyle::colors(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Placement of the bordered board inside the viewport, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardFrame {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl BoardFrame {
    /// Terminal cell holding pixel `(px, py)` of the panel.
    pub fn cell_of_pixel(&self, px: u32, py: u32) -> (u16, u16) {
        (
            self.x.saturating_add(1).saturating_add(px as u16),
            self.y.saturating_add(1).saturating_add((py / 2) as u16),
        )
    }
}

/// Terminal renderer for the game and its start menu.
pub struct GameView {
    panel: GamePanel,
    surface: PixelSurface,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(GamePanel::default())
    }
}

impl GameView {
    pub fn new(panel: GamePanel) -> Self {
        Self {
            panel,
            surface: PixelSurface::new(0, 0),
        }
    }

    pub fn panel(&self) -> &GamePanel {
        &self.panel
    }

    /// The pixels painted by the last render.
    pub fn surface(&self) -> &PixelSurface {
        &self.surface
    }

    /// Where the bordered board lands for a field of this size.
    pub fn board_frame<P: Playfield + ?Sized>(&self, field: &P, viewport: Viewport) -> BoardFrame {
        let (px_w, px_h) = self.panel.preferred_size(field);
        let width = (px_w as u16).saturating_add(2);
        let height = (px_h.div_ceil(2) as u16).saturating_add(2);
        BoardFrame {
            x: viewport.width.saturating_sub(width) / 2,
            y: viewport.height.saturating_sub(height) / 2,
            width,
            height,
        }
    }

    /// Render the game into an existing framebuffer.
    ///
    /// The pixel surface and the framebuffer are reused across frames and only
    /// reallocate when the board or terminal size changes.
    pub fn render_into(
        &mut self,
        game: &Tetris,
        overlay: Option<&Overlay>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (px_w, px_h) = self.panel.preferred_size(game);
        self.surface.resize(px_w, px_h);
        self.panel.paint(game, overlay, &mut self.surface);

        let frame = self.board_frame(game, viewport);
        self.blit(fb, frame);
        draw_border(fb, frame);
        draw_side_panel(fb, game, viewport, frame);

        if let Some(overlay) = overlay {
            self.draw_overlay_text(fb, frame, overlay);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&mut self, game: &Tetris, overlay: Option<&Overlay>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, overlay, viewport, &mut fb);
        fb
    }

    /// Title screen shown before a game and after leaving one.
    pub fn render_menu(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let lines: [(&str, CellStyle); 3] = [
            ("TETRIS", LABEL),
            ("Enter: Play", VALUE),
            ("Q: Quit", VALUE),
        ];
        let block_h = (lines.len() as u16) * 2 - 1;
        let top = viewport.height.saturating_sub(block_h) / 2;
        for (i, (text, style)) in lines.iter().enumerate() {
            let w = text.chars().count() as u16;
            let x = viewport.width.saturating_sub(w) / 2;
            fb.put_str(x, top.saturating_add(i as u16 * 2), text, *style);
        }
    }

    fn blit(&self, fb: &mut FrameBuffer, frame: BoardFrame) {
        let fallback = self.panel.background();
        let width = self.surface.width();
        let height = self.surface.height();

        for py in (0..height).step_by(2) {
            for px in 0..width {
                let top = self.surface.get(px as i32, py as i32).unwrap_or(fallback);
                let bottom = self.surface.get(px as i32, py as i32 + 1).unwrap_or(fallback);
                let (x, y) = frame.cell_of_pixel(px, py);
                fb.put_char(x, y, UPPER_HALF, CellStyle::colors(top, bottom));
            }
        }
    }

    /// Overlay text, one line per band slot, centered across the board.
    ///
    /// Each glyph keeps the band color underneath it as its background.
    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: BoardFrame, overlay: &Overlay) {
        let band = self.panel.overlay_band(overlay);
        let width = self.surface.width();

        for (i, line) in overlay.lines.iter().enumerate() {
            let py = band.line_center(i);
            if py >= self.surface.height() {
                break;
            }
            let text_w = (line.chars().count() as u32).min(width);
            let left = (width - text_w) / 2;

            for (offset, ch) in line.chars().take(text_w as usize).enumerate() {
                let px = left + offset as u32;
                let bg = self
                    .surface
                    .get(px as i32, py as i32)
                    .unwrap_or(self.panel.background());
                let style = CellStyle {
                    fg: Rgb::new(0, 0, 0),
                    bg,
                    bold: i == 0,
                    dim: false,
                };
                let (x, y) = frame.cell_of_pixel(px, py);
                fb.put_char(x, y, ch, style);
            }
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: BoardFrame) {
    let BoardFrame { x, y, width: w, height: h } = frame;
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', BORDER);
    fb.put_char(x + w - 1, y, '┐', BORDER);
    fb.put_char(x, y + h - 1, '└', BORDER);
    fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', BORDER);
        fb.put_char(x + dx, y + h - 1, '─', BORDER);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', BORDER);
        fb.put_char(x + w - 1, y + dy, '│', BORDER);
    }
}

fn draw_side_panel(fb: &mut FrameBuffer, game: &Tetris, viewport: Viewport, frame: BoardFrame) {
    let panel_x = frame.x.saturating_add(frame.width).saturating_add(2);
    if panel_x >= viewport.width || viewport.width - panel_x < 8 {
        return;
    }

    let mut y = frame.y;
    for (label, value) in [
        ("SCORE", game.score()),
        ("LEVEL", game.level()),
        ("LINES", game.lines()),
    ] {
        fb.put_str(panel_x, y, label, LABEL);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, value, VALUE);
        y = y.saturating_add(2);
    }

    let next = game.next_piece();
    fb.put_str(panel_x, y, "NEXT", LABEL);
    y = y.saturating_add(1);
    fb.put_str(
        panel_x,
        y,
        next.letter(),
        CellStyle {
            fg: next.color(),
            bold: true,
            ..VALUE
        },
    );
}
