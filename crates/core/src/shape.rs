//! The falling shape: a tetromino kind with rotation, position and color.

use crate::board::Board;
use crate::pieces::{get_shape, spawn_x};
use crate::types::{PieceKind, Rgb, Rotation};

/// Active falling shape
///
/// `x`/`y` locate the top-left corner of the shape's 4x4 box on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i16,
    pub y: i16,
    pub color: Rgb,
}

impl Shape {
    /// Create a new shape at the spawn position of a board `columns` wide
    pub fn spawn(kind: PieceKind, columns: u16) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: spawn_x(columns),
            y: 0,
            color: kind.color(),
        }
    }

    /// Absolute board positions `(x, y)` of the four minos
    pub fn cells(&self) -> [(i16, i16); 4] {
        get_shape(self.kind, self.rotation).map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Same shape shifted by `(dx, dy)`
    pub fn shifted(&self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Check if all minos are at free positions on the board
    pub fn fits(&self, board: &Board) -> bool {
        self.cells().iter().all(|&(x, y)| board.is_valid(x, y))
    }

    /// Check if the shape is resting on something
    pub fn is_grounded(&self, board: &Board) -> bool {
        !self.shifted(0, 1).fits(board)
    }

    /// Number of rows the shape can fall before it is grounded
    pub fn drop_distance(&self, board: &Board) -> i16 {
        let mut distance = 0;
        while self.shifted(0, distance + 1).fits(board) {
            distance += 1;
        }
        distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawned_shape_takes_kind_color() {
        let shape = Shape::spawn(PieceKind::L, 10);
        assert_eq!(shape.color, PieceKind::L.color());
        assert_eq!((shape.x, shape.y), (3, 0));
        assert_eq!(shape.cells(), [(5, 0), (3, 1), (4, 1), (5, 1)]);
    }

    #[test]
    fn drop_distance_on_empty_board() {
        let board = Board::new(10, 20);
        // O occupies rows 0 and 1 of its box, so it can fall to rows 18-19.
        let shape = Shape::spawn(PieceKind::O, 10);
        assert_eq!(shape.drop_distance(&board), 18);
        assert!(shape.shifted(0, 18).is_grounded(&board));
    }
}
