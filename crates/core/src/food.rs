//! Food placement
//!
//! The generator is reseeded from the clock plus the current segment count on
//! every placement. Random cells are rerolled while they land on the snake; if
//! the attempt budget runs out, the first free cell is taken instead so
//! placement always terminates.

use crate::grid::{Cell, Grid};
use crate::rng::RandomSource;
use crate::snake::Snake;
use crate::types::GRID_SIZE;

/// Random draws before falling back to a scan for a free cell
pub const MAX_FOOD_ATTEMPTS: u32 = 64;

/// Cell where food starts at power-on
pub const INITIAL_FOOD: Cell = Cell::new(6, 3);

/// Seed used for a placement: clock seconds plus segment count.
pub fn placement_seed(now_seconds: u64, segment_count: usize) -> u32 {
    (now_seconds as u32).wrapping_add(segment_count as u32)
}

/// Pick a food cell not covered by any segment of `snake`.
///
/// Returns an empty grid only if the snake covers the whole board, which the
/// win threshold rules out.
pub fn place_food<R: RandomSource>(rng: &mut R, now_seconds: u64, snake: &Snake) -> Grid {
    rng.reseed(placement_seed(now_seconds, snake.len()));

    for attempt in 0..MAX_FOOD_ATTEMPTS {
        let col = rng.next_range(GRID_SIZE as u32) as u8;
        let row = rng.next_range(GRID_SIZE as u32) as u8;
        let cell = Cell::new(col, row);
        if !snake.occupies(cell) {
            log::debug!("food placed at ({}, {}) after {} reroll(s)", col, row, attempt);
            return Grid::from_cell(cell);
        }
        log::trace!("food roll ({}, {}) hit the snake", col, row);
    }

    match first_free_cell(snake) {
        Some(cell) => {
            log::debug!(
                "food placed at first free cell ({}, {})",
                cell.col(),
                cell.row()
            );
            Grid::from_cell(cell)
        }
        None => Grid::EMPTY,
    }
}

fn first_free_cell(snake: &Snake) -> Option<Cell> {
    (0..GRID_SIZE as u8)
        .flat_map(|col| (0..GRID_SIZE as u8).map(move |row| Cell::new(col, row)))
        .find(|cell| !snake.occupies(*cell))
}
