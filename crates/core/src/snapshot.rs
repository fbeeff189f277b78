use crate::grid::Grid;
use crate::types::{Direction, RoundOutcome};

/// Read-only copy of everything a view needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// All segments OR-ed together
    pub frame: Grid,
    pub food: Grid,
    pub segment_count: usize,
    pub direction: Direction,
    /// Outcome being signalled, if a round just ended
    pub signal: Option<RoundOutcome>,
    pub signal_frames_left: u32,
    pub wins: u32,
    pub losses: u32,
    pub best_length: usize,
    pub ticks: u64,
}
