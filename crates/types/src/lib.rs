//! Shared types - piece kinds, commands, colors and tuning constants
//!
//! Everything here is plain data with no dependencies so that the game core,
//! the pixel renderer and the terminal front-end can all agree on it.
//!
//! # Board Dimensions
//!
//! The playfield size is chosen at game creation and never changes afterwards.
//! The classic size is 10 columns by 20 rows; any size between
//! [`MIN_DIMENSION`] and [`MAX_DIMENSION`] cells on each axis is accepted.
//!
//! # Game Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `LOCK_DELAY_MS` | 450 | Time before a grounded shape locks |
//! | `LOCK_RESET_LIMIT` | 15 | Max lock timer resets per shape |
//!
//! Gravity per level follows [`DROP_INTERVALS`] and is then divided by the
//! configured speed factor.
//!
//! # Examples
//!
//! ```
//! use tetris_panel_types::{PieceKind, Rgb, Rotation};
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(PieceKind::Z.color(), Rgb::new(220, 80, 80));
//! assert_eq!(Rgb::new(100, 100, 100).darker(), Rgb::new(70, 70, 70));
//! ```

/// Classic board width in cells
pub const DEFAULT_COLUMNS: u16 = 10;

/// Classic board height in cells
pub const DEFAULT_ROWS: u16 = 20;

/// Smallest accepted board side (a vertical I needs four rows, a spawn box four columns)
pub const MIN_DIMENSION: u16 = 4;

/// Largest accepted board side
pub const MAX_DIMENSION: u16 = 64;

/// Default edge length of one board cell in canvas pixels
pub const DEFAULT_CELL_SIZE: u32 = 2;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Lock delay when a shape is grounded
pub const LOCK_DELAY_MS: u32 = 450;

/// Maximum number of lock timer resets per shape
pub const LOCK_RESET_LIMIT: u8 = 15;

/// Drop intervals by level (milliseconds per row)
///
/// Index 0 = Level 0, Index 8 = Level 8
pub const DROP_INTERVALS: [u32; 9] = [1000, 800, 650, 500, 400, 320, 250, 200, 160];

/// Drop interval used past the end of [`DROP_INTERVALS`]
pub const DROP_INTERVAL_FLOOR_MS: u32 = 120;

/// Absolute minimum drop interval, applied after the speed factor
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring table (Classic Nintendo scoring)
///
/// Base points for clearing N lines at level 0; multiplied by (level + 1).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Factor used by [`Rgb::brighter`] and [`Rgb::darker`].
const SHADE_FACTOR: f64 = 0.7;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lighter shade used for the top and left bevel edges.
    ///
    /// Each channel is divided by 0.7 and clamped to 255. Channels in `1..3`
    /// are first lifted to 3 so they can grow at all, and pure black becomes
    /// `(3, 3, 3)`.
    ///
    /// ```
    /// use tetris_panel_types::Rgb;
    ///
    /// assert_eq!(Rgb::new(0, 0, 0).brighter(), Rgb::new(3, 3, 3));
    /// assert_eq!(Rgb::new(100, 0, 255).brighter(), Rgb::new(142, 0, 255));
    /// ```
    pub fn brighter(self) -> Self {
        let floor = (1.0 / (1.0 - SHADE_FACTOR)) as u8;
        if self.r == 0 && self.g == 0 && self.b == 0 {
            return Self::new(floor, floor, floor);
        }

        let lift = |c: u8| -> u8 {
            let c = if c > 0 && c < floor { floor } else { c };
            (f64::from(c) / SHADE_FACTOR).min(255.0) as u8
        };
        Self::new(lift(self.r), lift(self.g), lift(self.b))
    }

    /// Darker shade used for the bottom and right bevel edges.
    ///
    /// Each channel is scaled by 0.7 and truncated.
    pub fn darker(self) -> Self {
        let shade = |c: u8| -> u8 { (f64::from(c) * SHADE_FACTOR) as u8 };
        Self::new(shade(self.r), shade(self.g), shade(self.b))
    }
}

/// RGB color with an alpha channel, used for translucent overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub rgb: Rgb,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            rgb: Rgb::new(r, g, b),
            a,
        }
    }

    /// Composite this color over `dst` (source-over, straight alpha).
    pub fn over(self, dst: Rgb) -> Rgb {
        let a = u32::from(self.a);
        let mix = |s: u8, d: u8| -> u8 {
            ((u32::from(s) * a + u32::from(d) * (255 - a) + 127) / 255) as u8
        };
        Rgb::new(
            mix(self.rgb.r, dst.r),
            mix(self.rgb.g, dst.g),
            mix(self.rgb.b, dst.b),
        )
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(color)`: Cell filled by a locked shape of that color
pub type Cell = Option<Rgb>;

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Magenta, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in bag order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Fill color of a shape of this kind.
    pub fn color(self) -> Rgb {
        match self {
            PieceKind::I => Rgb::new(80, 220, 220),
            PieceKind::O => Rgb::new(240, 220, 80),
            PieceKind::T => Rgb::new(200, 120, 220),
            PieceKind::S => Rgb::new(100, 220, 120),
            PieceKind::Z => Rgb::new(220, 80, 80),
            PieceKind::J => Rgb::new(80, 120, 220),
            PieceKind::L => Rgb::new(255, 165, 0),
        }
    }

    /// Uppercase letter for text displays.
    pub fn letter(self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Rotation states following the Super Rotation System (SRS)
///
/// - **North**: Spawn orientation (0° rotation)
/// - **East**: Rotated 90° clockwise
/// - **South**: Rotated 180°
/// - **West**: Rotated 90° counter-clockwise (270° clockwise)
///
/// The rotation cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_panel_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (-90° or 270°)
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }
}

/// Commands produced by the input layer and consumed by the game or the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Move shape one cell left
    MoveLeft,
    /// Move shape one cell right
    MoveRight,
    /// Drop shape one cell down
    SoftDrop,
    /// Drop shape to the lowest valid row and lock it
    HardDrop,
    /// Rotate shape 90° clockwise
    RotateCw,
    /// Rotate shape 90° counter-clockwise
    RotateCcw,
    /// Toggle pause state
    TogglePause,
    /// Start over on a cleared board
    Restart,
    /// Leave the game and return to the main menu (handled by the host)
    ExitToMenu,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn darker_truncates_each_channel() {
        assert_eq!(Rgb::new(255, 255, 255).darker(), Rgb::new(178, 178, 178));
        assert_eq!(Rgb::new(10, 1, 0).darker(), Rgb::new(7, 0, 0));
    }

    #[test]
    fn brighter_lifts_small_channels() {
        assert_eq!(Rgb::new(1, 2, 0).brighter(), Rgb::new(4, 4, 0));
        assert_eq!(Rgb::new(200, 220, 250).brighter(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn alpha_blend_endpoints() {
        let dst = Rgb::new(10, 20, 30);
        assert_eq!(Rgba::new(200, 200, 200, 0).over(dst), dst);
        assert_eq!(
            Rgba::new(200, 200, 200, 255).over(dst),
            Rgb::new(200, 200, 200)
        );
    }

    #[test]
    fn every_kind_has_a_distinct_color() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(a.color(), b.color());
            }
        }
    }
}
