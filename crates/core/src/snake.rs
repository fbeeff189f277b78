//! Snake module - ordered segment list, head first
//!
//! Every segment is its own [`Grid`] with one lit cell. A move behaves like a
//! shift register of positions: the head moves, and segment `i` takes the
//! position segment `i - 1` had before the move.

use arrayvec::ArrayVec;

use crate::grid::{Cell, Grid};
use crate::types::{Direction, START_SEGMENTS, WIN_SEGMENTS};

/// Segment storage; a round ends as soon as the win threshold is reached.
pub type Segments = ArrayVec<Grid, WIN_SEGMENTS>;

#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    segments: Segments,
}

impl Snake {
    /// The power-on layout: head at column 2, body trailing to the right on row 3.
    pub fn new() -> Self {
        Self::from_cells(&[Cell::new(2, 3), Cell::new(3, 3), Cell::new(4, 3)])
    }

    /// Build a snake from head-first cells. Cells past capacity are ignored.
    pub fn from_cells(cells: &[Cell]) -> Self {
        let segments = cells
            .iter()
            .take(WIN_SEGMENTS)
            .map(|cell| Grid::from_cell(*cell))
            .collect();
        Self { segments }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn head(&self) -> Grid {
        self.segments.first().copied().unwrap_or(Grid::EMPTY)
    }

    pub fn segments(&self) -> &[Grid] {
        &self.segments
    }

    /// Segments after the head
    pub fn body(&self) -> &[Grid] {
        self.segments.get(1..).unwrap_or(&[])
    }

    /// Move the head one cell, wrapping at the edges.
    pub fn advance_head(&mut self, direction: Direction) {
        if let Some(head) = self.segments.first_mut() {
            *head = head.shifted(direction);
        }
    }

    /// Copy each body segment from its neighbour's position in `before`.
    ///
    /// `before` must be the segment list as it was before the head moved.
    pub fn propagate_body(&mut self, before: &[Grid]) {
        for (i, segment) in self.segments.iter_mut().enumerate().skip(1) {
            if let Some(ahead) = before.get(i - 1) {
                *segment = *ahead;
            }
        }
    }

    /// Advance the head, then shift every body segment forward one step.
    pub fn step(&mut self, direction: Direction) {
        let before = self.segments.clone();
        self.advance_head(direction);
        self.propagate_body(&before);
    }

    /// Append a copy of the last segment. Returns false when already full.
    pub fn grow_by_segment(&mut self) -> bool {
        match self.segments.last().copied() {
            Some(tail) => self.segments.try_push(tail).is_ok(),
            None => false,
        }
    }

    /// Drop back to the starting length, keeping the leading segments in place.
    pub fn reset_length(&mut self) {
        self.segments.truncate(START_SEGMENTS);
    }

    /// OR of every segment: the frame the snake lights up.
    pub fn compose(&self) -> Grid {
        self.segments.iter().fold(Grid::EMPTY, |acc, s| acc | *s)
    }

    /// True if any segment occupies `cell`
    pub fn occupies(&self, cell: Cell) -> bool {
        self.segments.iter().any(|s| s.is_lit(cell))
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}
