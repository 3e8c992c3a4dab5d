//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, input mapping).
//!
//! # Grid
//!
//! The playfield is a toroidal grid: moving off one edge re-enters on the
//! opposite edge.
//!
//! - **Width**: 20 columns (indexed 0-19)
//! - **Height**: 20 rows (indexed 0-19)
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_EXIT_KEY` | `q` | Key that ends the loop when found in the input buffer |
//! | `DEFAULT_INPUT_BUFFER_LIMIT` | 10 | Ring evicts once it holds more than this |
//! | `DEFAULT_POLL_TIMEOUT_MS` | 500 | Input poll timeout, doubles as frame pacing |
//! | `DEFAULT_ACTOR_LENGTH` | 9 | Number of body segments |
//! | `DEFAULT_ACTOR_GLYPH` | `▀` | Snake glyph |
//! | `DEFAULT_ITEM_GLYPH` | `∆` | Food marker glyph |
//! | `BACKGROUND_GLYPH` | `®` | Glyph for empty cells |
//!
//! # Examples
//!
//! ```
//! use snake_loop_types::{Direction, Position, DEFAULT_WIDTH};
//!
//! let dir = Direction::from_delta(0, -1).unwrap();
//! assert_eq!(dir, Direction::Up);
//!
//! let p = Position::new(3, 4).offset(dir.delta().0, dir.delta().1);
//! assert_eq!(p, Position::new(3, 3));
//!
//! assert_eq!(DEFAULT_WIDTH, 20);
//! ```

/// Grid width in cells (20 columns)
pub const DEFAULT_WIDTH: u16 = 20;

/// Grid height in cells (20 rows)
pub const DEFAULT_HEIGHT: u16 = 20;

/// Key that terminates the loop.
pub const DEFAULT_EXIT_KEY: char = 'q';

/// Input ring evicts its oldest entry once it holds more than this many keys.
pub const DEFAULT_INPUT_BUFFER_LIMIT: usize = 10;

/// Fixed backing storage of the input ring. Configured limits are clamped so
/// that `limit + 1` fits.
pub const INPUT_BUFFER_STORAGE: usize = 64;

/// Input poll timeout in milliseconds (also the upper bound on frame time).
pub const DEFAULT_POLL_TIMEOUT_MS: u64 = 500;

/// Starting head position of the actor.
pub const DEFAULT_ACTOR_START: Position = Position::new(0, 0);

/// Number of body segments of the actor.
pub const DEFAULT_ACTOR_LENGTH: usize = 9;

/// Actor glyph.
pub const DEFAULT_ACTOR_GLYPH: char = '▀';

/// Actor speed (cells per tick).
pub const DEFAULT_ACTOR_SPEED: i32 = 1;

/// Glyph used by entities created without one.
pub const DEFAULT_OBJECT_GLYPH: char = '*';

/// Food marker position.
pub const DEFAULT_ITEM_POSITION: Position = Position::new(10, 10);

/// Food marker glyph.
pub const DEFAULT_ITEM_GLYPH: char = '∆';

/// Glyph rendered for cells with no content.
pub const BACKGROUND_GLYPH: char = '®';

/// Raw byte a terminal delivers for Ctrl+C.
pub const INTERRUPT_CODE: u32 = 3;


/// Integer grid coordinate.
///
/// Coordinates are signed so that off-grid positions (negative or past the
/// edge) can be represented before wrapping or bounds checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)` without any bounds applied.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Wrap into `[0, width) x [0, height)` using mathematical modulo, so
    /// negative coordinates land on the far edge.
    pub fn wrapped(self, width: u16, height: u16) -> Self {
        Self {
            x: self.x.rem_euclid(i32::from(width)),
            y: self.y.rem_euclid(i32::from(height)),
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Heading of the actor.
///
/// Screen coordinates: `y` grows downward, so `Up` is `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step `(dx, dy)` for this heading.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}
