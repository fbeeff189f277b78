//! LED matrix emulator.
//!
//! Mimics what the eye sees on a multiplexed 8x8 matrix: every row pattern
//! written while a column is selected lights those LEDs for the rest of the
//! loop iteration. [`DisplayAdapter::end_frame`] latches the iteration's
//! image and starts a fresh one, so the snake pass and the food pass of one
//! iteration appear together, the way persistence of vision merges them.

use crate::core::Grid;
use crate::types::{DisplayAdapter, GRID_SIZE};

#[derive(Debug, Clone, Default)]
pub struct MatrixDisplay {
    col_select: u8,
    lit: [u8; GRID_SIZE],
    latched: Grid,
    frames: u64,
}

impl MatrixDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Image of the last completed iteration.
    pub fn latched(&self) -> Grid {
        self.latched
    }

    /// Number of completed iterations.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl DisplayAdapter for MatrixDisplay {
    fn set_column_select(&mut self, col_mask: u8) {
        self.col_select = col_mask;
    }

    fn write_row_pattern(&mut self, row_mask: u8) {
        for (col, lit) in self.lit.iter_mut().enumerate() {
            if self.col_select & (1 << col) != 0 {
                *lit |= row_mask;
            }
        }
    }

    fn end_frame(&mut self) {
        self.latched = Grid::from_columns(self.lit);
        self.lit = [0; GRID_SIZE];
        self.col_select = 0;
        self.frames += 1;
    }
}
