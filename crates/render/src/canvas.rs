//! Drawing surface abstraction and a call recorder.

use crate::types::{Rgb, Rgba};

/// A 2D pixel target.
///
/// Coordinates are in pixels with the origin at the top-left corner.
/// Implementations clip anything outside their bounds.
pub trait Canvas {
    /// Paint the whole surface with one color.
    fn clear(&mut self, color: Rgb);

    /// Fill `width x height` pixels starting at `(x, y)`.
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb);

    /// Draw a one-pixel line including both endpoints.
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb);

    /// Composite a translucent rectangle over what is already drawn.
    fn blend_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgba);
}

/// One recorded [`Canvas`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCall {
    Clear(Rgb),
    FillRect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Rgb,
    },
    Line {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Rgb,
    },
    BlendRect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Rgba,
    },
}

/// Canvas that keeps the calls instead of drawing them.
#[derive(Debug, Clone, Default)]
pub struct DrawRecorder {
    calls: Vec<DrawCall>,
}

impl DrawRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Recorded `fill_rect` calls, in order.
    pub fn filled_rects(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::FillRect { .. }))
    }

    pub fn reset(&mut self) {
        self.calls.clear();
    }
}

impl Canvas for DrawRecorder {
    fn clear(&mut self, color: Rgb) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb) {
        self.calls.push(DrawCall::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) {
        self.calls.push(DrawCall::Line {
            x0,
            y0,
            x1,
            y1,
            color,
        });
    }

    fn blend_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgba) {
        self.calls.push(DrawCall::BlendRect {
            x,
            y,
            width,
            height,
            color,
        });
    }
}
