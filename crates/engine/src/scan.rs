//! Column scan-out of a grid to a [`DisplayAdapter`].

use crate::core::Grid;
use crate::types::{DisplayAdapter, GRID_SIZE};

/// Drive one full 8x8 frame: for every column, select it, write its rows,
/// then blank the rows before moving to the next column.
pub fn scan_out<D: DisplayAdapter + ?Sized>(display: &mut D, frame: &Grid) {
    let mut col_select: u8 = 0x01;
    for col in 0..GRID_SIZE as u8 {
        display.set_column_select(col_select);
        display.write_row_pattern(frame.column(col));
        display.write_row_pattern(0x00);
        col_select = col_select.rotate_left(1);
    }
}
