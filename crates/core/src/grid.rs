//! Grid module - 8x8 occupancy matrix
//!
//! A grid is stored the way the LED matrix is driven: one byte per column,
//! bit `r` of column `c` lighting cell (c, r). Snake segments, food and the
//! composed frame are all grids.
//!
//! Movement is bit rotation, never clamping: rows rotate inside the column byte
//! (Up/Down) and columns rotate inside the array (Left/Right), so a lit cell
//! leaving one edge reappears on the opposite edge.

use std::ops::{BitOr, BitOrAssign};

use crate::types::{Direction, GRID_SIZE};

/// A cell coordinate. Both coordinates are always in 0..8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    col: u8,
    row: u8,
}

impl Cell {
    /// Create a cell; coordinates wrap modulo the grid size.
    pub const fn new(col: u8, row: u8) -> Self {
        Self {
            col: col % GRID_SIZE as u8,
            row: row % GRID_SIZE as u8,
        }
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    /// Row bitmask for this cell (1 << row)
    pub fn row_bit(&self) -> u8 {
        1 << self.row
    }
}

/// 8 columns x 8-bit row masks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid([u8; GRID_SIZE]);

impl Grid {
    pub const EMPTY: Grid = Grid([0; GRID_SIZE]);

    pub const fn from_columns(columns: [u8; GRID_SIZE]) -> Self {
        Self(columns)
    }

    /// A grid with exactly one lit cell
    pub fn from_cell(cell: Cell) -> Self {
        let mut columns = [0; GRID_SIZE];
        columns[cell.col as usize] = cell.row_bit();
        Self(columns)
    }

    pub fn columns(&self) -> &[u8; GRID_SIZE] {
        &self.0
    }

    pub fn column(&self, col: u8) -> u8 {
        self.0[(col as usize) % GRID_SIZE]
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|c| *c == 0)
    }

    /// Number of lit cells
    pub fn lit_count(&self) -> u32 {
        self.0.iter().map(|c| c.count_ones()).sum()
    }

    pub fn is_lit(&self, cell: Cell) -> bool {
        self.column(cell.col) & cell.row_bit() != 0
    }

    /// First lit cell in column-major order, if any
    pub fn cell(&self) -> Option<Cell> {
        self.0
            .iter()
            .enumerate()
            .find(|(_, c)| **c != 0)
            .map(|(col, c)| Cell::new(col as u8, c.trailing_zeros() as u8))
    }

    /// The grid moved one cell in `direction`, wrapping at the edges
    pub fn shifted(self, direction: Direction) -> Grid {
        let mut columns = self.0;
        match direction {
            Direction::Up => columns.iter_mut().for_each(|c| *c = c.rotate_left(1)),
            Direction::Down => columns.iter_mut().for_each(|c| *c = c.rotate_right(1)),
            // Column x takes the contents of column x + 1; column 0 wraps to 7.
            Direction::Left => columns.rotate_left(1),
            Direction::Right => columns.rotate_right(1),
        }
        Grid(columns)
    }

    /// True if some cell is lit in both grids. Empty grids share nothing.
    pub fn shares_cell(&self, other: &Grid) -> bool {
        self.0.iter().zip(other.0.iter()).any(|(a, b)| a & b != 0)
    }
}

impl BitOr for Grid {
    type Output = Grid;

    fn bitor(mut self, rhs: Grid) -> Grid {
        self |= rhs;
        self
    }
}

impl BitOrAssign for Grid {
    fn bitor_assign(&mut self, rhs: Grid) {
        for (dst, src) in self.0.iter_mut().zip(rhs.0.iter()) {
            *dst |= *src;
        }
    }
}
