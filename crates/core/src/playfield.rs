//! Read-only view of a playfield, consumed by renderers.

use crate::board::Board;
use crate::shape::Shape;
use crate::types::Cell;

/// What a renderer needs to know about a game: the locked cells and the
/// falling shape. Implementors must not expose any way to mutate the game.
pub trait Playfield {
    fn rows(&self) -> u16;

    fn columns(&self) -> u16;

    /// Locked cell at (row, column); `None` for empty or out-of-bounds cells.
    fn cell_at(&self, row: u16, column: u16) -> Cell;

    /// The falling shape, if one is in play.
    fn current_shape(&self) -> Option<Shape>;

    fn is_position_occupied(&self, row: u16, column: u16) -> bool {
        self.cell_at(row, column).is_some()
    }

    /// What is visible at (row, column): the falling shape wins over the board.
    fn piece_at(&self, row: u16, column: u16) -> Cell {
        if let Some(shape) = self.current_shape() {
            let target = (column as i16, row as i16);
            if shape.cells().contains(&target) {
                return Some(shape.color);
            }
        }
        self.cell_at(row, column)
    }
}

/// A bare board is a playfield with nothing falling.
impl Playfield for Board {
    fn rows(&self) -> u16 {
        Board::rows(self)
    }

    fn columns(&self) -> u16 {
        Board::columns(self)
    }

    fn cell_at(&self, row: u16, column: u16) -> Cell {
        self.get(column as i16, row as i16).flatten()
    }

    fn current_shape(&self) -> Option<Shape> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceKind, Rgb, Rotation};

    struct Fixture {
        board: Board,
        shape: Option<Shape>,
    }

    impl Playfield for Fixture {
        fn rows(&self) -> u16 {
            self.board.rows()
        }

        fn columns(&self) -> u16 {
            self.board.columns()
        }

        fn cell_at(&self, row: u16, column: u16) -> Cell {
            self.board.cell_at(row, column)
        }

        fn current_shape(&self) -> Option<Shape> {
            self.shape
        }
    }

    #[test]
    fn piece_at_prefers_the_falling_shape() {
        let mut board = Board::new(6, 6);
        let grey = Rgb::new(90, 90, 90);
        board.set(0, 5, Some(grey));

        let shape = Shape {
            kind: PieceKind::O,
            rotation: Rotation::North,
            x: 0,
            y: 0,
            color: PieceKind::O.color(),
        };
        let field = Fixture {
            board,
            shape: Some(shape),
        };

        let (x, y) = shape.cells()[0];
        assert_eq!(field.piece_at(y as u16, x as u16), Some(shape.color));
        assert!(!field.is_position_occupied(y as u16, x as u16));
        assert_eq!(field.piece_at(5, 0), Some(grey));
        assert_eq!(field.piece_at(4, 4), None);
    }
}
