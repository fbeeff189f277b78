//! Core types module - shared data structures, constants and device interfaces
//!
//! Everything here is plain data or a plain trait with no external dependencies,
//! so it can be shared by the game core, the loop, and any device backend
//! (LED matrix, terminal emulator, test doubles).
//!
//! # Grid
//!
//! The playfield is the 8x8 LED matrix itself:
//!
//! - **Columns**: 8 (indexed 0-7, left to right)
//! - **Rows**: 8 (indexed 0-7, bit `r` of a column byte is row `r`)
//! - Moving **Up** raises the row index, so row 7 is the top of the display
//!
//! # Timing Constants
//!
//! Timing is counted in loop iterations, not milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MOVE_INTERVAL` | 50 | Snake moves once the counter exceeds this (every 51 iterations) |
//! | `SIGNAL_FRAMES` | 1000 | Iterations the Win/Lose glyph stays on screen |
//!
//! # Joystick
//!
//! Axis readings are raw integers with a midpoint of [`AXIS_CENTER`]. Readings
//! between [`AXIS_LOW`] and [`AXIS_HIGH`] form a dead zone.
//!
//! # Examples
//!
//! ```
//! use matrix_snake_types::{Direction, GRID_SIZE, WIN_SEGMENTS};
//!
//! let dir = Direction::from_str("up").unwrap();
//! assert_eq!(dir.opposite(), Direction::Down);
//!
//! assert_eq!(GRID_SIZE, 8);
//! assert_eq!(WIN_SEGMENTS, 40);
//! ```

/// Grid edge length in cells (8 columns, 8 rows)
pub const GRID_SIZE: usize = 8;

/// Segment count at startup and after every Win/Lose
pub const START_SEGMENTS: usize = 3;

/// Segment count that wins a round
pub const WIN_SEGMENTS: usize = 40;

/// Movement runs when the iteration counter exceeds this value
pub const MOVE_INTERVAL: u32 = 50;

/// Loop iterations a Win/Lose glyph is displayed for
pub const SIGNAL_FRAMES: u32 = 1000;

/// Joystick reading at rest
pub const AXIS_CENTER: i32 = 500;

/// Readings above this are a deliberate deflection towards Up/Right
pub const AXIS_HIGH: i32 = 600;

/// Readings below this are a deliberate deflection towards Down/Left
pub const AXIS_LOW: i32 = 400;

/// Lowest raw reading a sampler reports
pub const AXIS_MIN: i32 = 0;

/// Highest raw reading a sampler reports
pub const AXIS_MAX: i32 = 1000;

/// Column patterns shown when a round is lost (an 'X')
pub const LOSE_GLYPH: [u8; GRID_SIZE] = [129, 66, 36, 24, 24, 36, 66, 129];

/// Column patterns shown when a round is won (a smile)
pub const WIN_GLYPH: [u8; GRID_SIZE] = [60, 66, 169, 133, 133, 169, 66, 60];


/// Movement direction of the snake head
///
/// The last accepted direction is latched across ticks; a direct reversal is
/// never accepted (see [`Direction::opposite`]).
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

    /// The 180° reversal of this direction
    ///
    /// # Examples
    ///
    /// ```
    /// use matrix_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "up" | "u", "down" | "d",
    /// "left" | "l", "right" | "r"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// The snake reached [`WIN_SEGMENTS`]
    Win,
    /// The head ran into a body segment
    Lose,
}

impl RoundOutcome {
    /// Column patterns displayed while this outcome is being signalled
    pub fn glyph(&self) -> [u8; GRID_SIZE] {
        match self {
            RoundOutcome::Win => WIN_GLYPH,
            RoundOutcome::Lose => LOSE_GLYPH,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoundOutcome::Win => "win",
            RoundOutcome::Lose => "lose",
        }
    }
}

/// One raw sample from the two-axis input device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisReading {
    pub x: i32,
    pub y: i32,
}

impl AxisReading {
    pub const CENTERED: AxisReading = AxisReading {
        x: AXIS_CENTER,
        y: AXIS_CENTER,
    };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Output device that scans out an 8x8 bit matrix one column at a time.
///
/// Writes are fire-and-forget: the game core never observes a failure.
/// How the bits reach the LEDs (shift registers, latches, a terminal) is the
/// implementor's business.
pub trait DisplayAdapter {
    /// Select the columns driven by the next row write (bit `c` = column `c`).
    fn set_column_select(&mut self, col_mask: u8);

    /// Drive the row lines of the selected columns (bit `r` = row `r`).
    fn write_row_pattern(&mut self, row_mask: u8);

    /// Called once at the end of every loop iteration.
    ///
    /// Hardware displays have nothing to do here; emulators use it to latch
    /// what was lit during the iteration.
    fn end_frame(&mut self) {}
}

/// Two-axis analog input device (a joystick).
pub trait InputSampler {
    /// Raw X reading; [`AXIS_CENTER`] at rest, lower is Left.
    fn read_axis_x(&mut self) -> i32;

    /// Raw Y reading; [`AXIS_CENTER`] at rest, lower is Down.
    fn read_axis_y(&mut self) -> i32;

    /// Sample both axes, X first.
    fn sample(&mut self) -> AxisReading {
        let x = self.read_axis_x();
        let y = self.read_axis_y();
        AxisReading { x, y }
    }
}

/// Wall-clock source used only to seed food placement.
pub trait TimeSource {
    fn now_seconds(&self) -> u64;
}
