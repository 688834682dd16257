//! Pieces module - Tetromino shapes and SRS rotation system
//!
//! Shapes are four mino offsets inside a 4x4 box whose top-left corner is the
//! shape's reference position. Rotation uses the Super Rotation System wall
//! kick tables. Reference: https://tetris.wiki/SRS
//!
//! The published kick tables use y-up offsets; the tables below are already
//! flipped for the board's y-down rows.

use crate::types::{PieceKind, Rotation};

/// Offset of a single mino relative to the shape's reference position
pub type MinoOffset = (i16, i16);

/// Shape of a piece - 4 mino offsets from the reference position
pub type PieceShape = [MinoOffset; 4];

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    match kind {
        PieceKind::I => match rotation {
            Rotation::North => [(0, 1), (1, 1), (2, 1), (3, 1)],
            Rotation::East => [(2, 0), (2, 1), (2, 2), (2, 3)],
            Rotation::South => [(0, 2), (1, 2), (2, 2), (3, 2)],
            Rotation::West => [(1, 0), (1, 1), (1, 2), (1, 3)],
        },
        PieceKind::O => [(1, 0), (2, 0), (1, 1), (2, 1)],
        PieceKind::T => match rotation {
            Rotation::North => [(1, 0), (0, 1), (1, 1), (2, 1)],
            Rotation::East => [(1, 0), (1, 1), (2, 1), (1, 2)],
            Rotation::South => [(0, 1), (1, 1), (2, 1), (1, 2)],
            Rotation::West => [(1, 0), (0, 1), (1, 1), (1, 2)],
        },
        PieceKind::S => match rotation {
            Rotation::North => [(1, 0), (2, 0), (0, 1), (1, 1)],
            Rotation::East => [(1, 0), (1, 1), (2, 1), (2, 2)],
            Rotation::South => [(1, 1), (2, 1), (0, 2), (1, 2)],
            Rotation::West => [(0, 0), (0, 1), (1, 1), (1, 2)],
        },
        PieceKind::Z => match rotation {
            Rotation::North => [(0, 0), (1, 0), (1, 1), (2, 1)],
            Rotation::East => [(2, 0), (1, 1), (2, 1), (1, 2)],
            Rotation::South => [(0, 1), (1, 1), (1, 2), (2, 2)],
            Rotation::West => [(1, 0), (0, 1), (1, 1), (0, 2)],
        },
        PieceKind::J => match rotation {
            Rotation::North => [(0, 0), (0, 1), (1, 1), (2, 1)],
            Rotation::East => [(1, 0), (2, 0), (1, 1), (1, 2)],
            Rotation::South => [(0, 1), (1, 1), (2, 1), (2, 2)],
            Rotation::West => [(1, 0), (1, 1), (0, 2), (1, 2)],
        },
        PieceKind::L => match rotation {
            Rotation::North => [(2, 0), (0, 1), (1, 1), (2, 1)],
            Rotation::East => [(1, 0), (1, 1), (1, 2), (2, 2)],
            Rotation::South => [(0, 1), (1, 1), (2, 1), (0, 2)],
            Rotation::West => [(0, 0), (1, 0), (1, 1), (1, 2)],
        },
    }
}

/// SRS wall kick data
/// Each entry is (dx, dy) offset to try; entry 0 is the unkicked rotation
pub type KickTable = [[(i16, i16); 5]; 8];

/// Get kick table for a piece kind, indexed by [`kick_index`]
pub fn get_kick_table(kind: PieceKind) -> &'static KickTable {
    match kind {
        PieceKind::O => &O_KICKS,
        PieceKind::I => &I_KICKS,
        _ => &JLSTZ_KICKS,
    }
}

const O_KICKS: KickTable = [[(0, 0); 5]; 8];

const JLSTZ_KICKS: KickTable = [
    // N->E
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // N->W
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // E->N
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // E->S
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // S->E
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // S->W
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // W->S
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // W->N
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
];

const I_KICKS: KickTable = [
    // N->E
    [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
    // N->W
    [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
    // E->N
    [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
    // E->S
    [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
    // S->E
    [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
    // S->W
    [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
    // W->S
    [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
    // W->N
    [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
];

/// Row of the kick table for a rotation transition
pub fn kick_index(from: Rotation, clockwise: bool) -> usize {
    match (from, clockwise) {
        (Rotation::North, true) => 0,
        (Rotation::North, false) => 1,
        (Rotation::East, false) => 2,
        (Rotation::East, true) => 3,
        (Rotation::South, false) => 4,
        (Rotation::South, true) => 5,
        (Rotation::West, false) => 6,
        (Rotation::West, true) => 7,
    }
}

/// Try to rotate a piece with wall kicks
///
/// `is_free` reports whether an absolute board position can hold a mino.
/// Returns the new rotation and the kick offset that was applied, or None if
/// every kick collides.
pub fn try_rotate(
    kind: PieceKind,
    rotation: Rotation,
    x: i16,
    y: i16,
    clockwise: bool,
    is_free: impl Fn(i16, i16) -> bool,
) -> Option<(Rotation, (i16, i16))> {
    let new_rotation = if clockwise {
        rotation.rotate_cw()
    } else {
        rotation.rotate_ccw()
    };

    let new_shape = get_shape(kind, new_rotation);
    let kicks = &get_kick_table(kind)[kick_index(rotation, clockwise)];

    kicks
        .iter()
        .copied()
        .find(|&(dx, dy)| {
            new_shape
                .iter()
                .all(|&(mx, my)| is_free(x + dx + mx, y + dy + my))
        })
        .map(|kick| (new_rotation, kick))
}

/// Column of the reference position for a new shape on a board `columns` wide
pub fn spawn_x(columns: u16) -> i16 {
    (columns as i16 - 4) / 2
}
