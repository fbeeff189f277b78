//! Game state module - owns the snake, the food and the round lifecycle
//!
//! The loop drives this type through three entry points:
//!
//! - [`GameState::steer`] every iteration, to latch the player's intent
//! - [`GameState::tick`] on the movement cadence, to move and resolve collisions
//! - [`GameState::advance_frame`] every iteration, to count down a Win/Lose signal
//!
//! Ending a round never blocks: the state enters [`Phase::Signal`] and keeps
//! accepting input while the glyph is on screen.

use crate::collision;
use crate::food::{place_food, INITIAL_FOOD};
use crate::grid::Grid;
use crate::rng::{RandomSource, SimpleRng};
use crate::snake::Snake;
use crate::snapshot::GameSnapshot;
use crate::steering;
use crate::types::{AxisReading, Direction, RoundOutcome, SIGNAL_FRAMES, START_SEGMENTS};

/// Round lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    /// A round just ended; the glyph stays up for `frames_left` more iterations.
    Signal {
        outcome: RoundOutcome,
        frames_left: u32,
    },
}

/// Totals across rounds since power-on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundStats {
    pub wins: u32,
    pub losses: u32,
    pub best_length: usize,
}

impl Default for RoundStats {
    fn default() -> Self {
        Self {
            wins: 0,
            losses: 0,
            best_length: START_SEGMENTS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    snake: Snake,
    food: Grid,
    /// Latched direction of the last move.
    direction: Direction,
    /// Most recent intent sampled since the last tick.
    pending: Option<Direction>,
    phase: Phase,
    stats: RoundStats,
    /// Number of moves performed.
    ticks: u64,
    rng: R,
}

impl GameState<SimpleRng> {
    /// Power-on state with the default generator
    pub fn new() -> Self {
        Self::with_rng(SimpleRng::default())
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> GameState<R> {
    /// Power-on state: three segments on row 3, food at (6, 3), heading Up.
    pub fn with_rng(rng: R) -> Self {
        Self::from_parts(Snake::new(), Grid::from_cell(INITIAL_FOOD), Direction::Up, rng)
    }

    /// Build a state from an arbitrary board (tests, replays).
    pub fn from_parts(snake: Snake, food: Grid, direction: Direction, rng: R) -> Self {
        let best_length = snake.len().max(START_SEGMENTS);
        Self {
            snake,
            food,
            direction,
            pending: None,
            phase: Phase::Running,
            stats: RoundStats {
                best_length,
                ..RoundStats::default()
            },
            ticks: 0,
            rng,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Grid {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_turn(&self) -> Option<Direction> {
        self.pending
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn stats(&self) -> RoundStats {
        self.stats
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn segment_count(&self) -> usize {
        self.snake.len()
    }

    pub fn is_signalling(&self) -> bool {
        matches!(self.phase, Phase::Signal { .. })
    }

    /// Latch the intent carried by one joystick sample. Neutral samples keep
    /// the previous intent until the next tick consumes it.
    pub fn steer(&mut self, reading: AxisReading) {
        if let Some(dir) = steering::intent(reading) {
            self.pending = Some(dir);
        }
    }

    /// Move one cell and resolve collisions.
    ///
    /// Returns the outcome if this move ended the round. Does nothing while a
    /// Win/Lose signal is on screen.
    pub fn tick(&mut self, now_seconds: u64) -> Option<RoundOutcome> {
        if self.is_signalling() {
            return None;
        }

        self.direction = steering::resolve(self.pending.take(), self.direction);
        self.snake.step(self.direction);
        self.ticks += 1;

        self.resolve_collisions(now_seconds)
    }

    fn resolve_collisions(&mut self, now_seconds: u64) -> Option<RoundOutcome> {
        let hit = collision::detect(&self.snake, &self.food);

        if hit.ate_food {
            self.food = place_food(&mut self.rng, now_seconds, &self.snake);
            self.snake.grow_by_segment();
            self.stats.best_length = self.stats.best_length.max(self.snake.len());
            log::debug!("food eaten, length {}", self.snake.len());
        }

        let outcome = if hit.hit_body {
            Some(RoundOutcome::Lose)
        } else if collision::has_won(&self.snake) {
            Some(RoundOutcome::Win)
        } else {
            None
        };

        if let Some(outcome) = outcome {
            self.finish_round(outcome);
        }
        outcome
    }

    fn finish_round(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Win => self.stats.wins += 1,
            RoundOutcome::Lose => self.stats.losses += 1,
        }
        log::info!(
            "round over: {} at length {} (wins {}, losses {})",
            outcome.as_str(),
            self.snake.len(),
            self.stats.wins,
            self.stats.losses
        );

        // Body and food stay where they are; only the length resets.
        self.snake.reset_length();
        self.phase = Phase::Signal {
            outcome,
            frames_left: SIGNAL_FRAMES,
        };
    }

    /// Count down an active Win/Lose signal by one loop iteration.
    pub fn advance_frame(&mut self) {
        if let Phase::Signal { frames_left, .. } = &mut self.phase {
            *frames_left = frames_left.saturating_sub(1);
            if *frames_left == 0 {
                self.phase = Phase::Running;
            }
        }
    }

    /// Glyph to display instead of the board while signalling
    pub fn signal_glyph(&self) -> Option<Grid> {
        match self.phase {
            Phase::Signal { outcome, .. } => Some(Grid::from_columns(outcome.glyph())),
            Phase::Running => None,
        }
    }

    /// The snake's body merged into one frame
    pub fn compose_frame(&self) -> Grid {
        self.snake.compose()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let (signal, signal_frames_left) = match self.phase {
            Phase::Signal {
                outcome,
                frames_left,
            } => (Some(outcome), frames_left),
            Phase::Running => (None, 0),
        };
        GameSnapshot {
            frame: self.compose_frame(),
            food: self.food,
            segment_count: self.snake.len(),
            direction: self.direction,
            signal,
            signal_frames_left,
            wins: self.stats.wins,
            losses: self.stats.losses,
            best_length: self.stats.best_length,
            ticks: self.ticks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    fn push(dir: Direction) -> AxisReading {
        match dir {
            Direction::Up => AxisReading::new(500, 1000),
            Direction::Down => AxisReading::new(500, 0),
            Direction::Left => AxisReading::new(0, 500),
            Direction::Right => AxisReading::new(1000, 500),
        }
    }

    #[test]
    fn test_power_on_state() {
        let gs = GameState::new();
        assert_eq!(gs.segment_count(), 3);
        assert_eq!(gs.direction(), Direction::Up);
        assert_eq!(gs.food().cell(), Some(Cell::new(6, 3)));
        assert_eq!(gs.phase(), Phase::Running);
    }

    #[test]
    fn test_tick_without_input_keeps_direction() {
        let mut gs = GameState::new();
        gs.tick(0);
        gs.tick(0);
        assert_eq!(gs.direction(), Direction::Up);
        assert_eq!(gs.snake().head().cell(), Some(Cell::new(2, 5)));
        assert_eq!(gs.ticks(), 2);
    }

    #[test]
    fn test_neutral_sample_keeps_latched_intent() {
        let mut gs = GameState::new();
        gs.steer(push(Direction::Left));
        gs.steer(AxisReading::CENTERED);
        assert_eq!(gs.pending_turn(), Some(Direction::Left));

        gs.tick(0);
        assert_eq!(gs.direction(), Direction::Left);
        assert_eq!(gs.pending_turn(), None);
    }

    #[test]
    fn test_reverse_intent_is_ignored() {
        let mut gs = GameState::new();
        gs.steer(push(Direction::Down));
        gs.tick(0);
        assert_eq!(gs.direction(), Direction::Up);
    }

    #[test]
    fn test_eating_grows_and_moves_food() {
        // Head at (2, 3) heading Up; food directly above.
        let snake = Snake::new();
        let food = Grid::from_cell(Cell::new(2, 4));
        let mut gs = GameState::from_parts(snake, food, Direction::Up, SimpleRng::new(3));

        assert_eq!(gs.tick(42), None);
        assert_eq!(gs.segment_count(), 4);
        assert_eq!(gs.stats().best_length, 4);

        let new_food = gs.food().cell().expect("food respawned");
        assert!(!gs.snake().occupies(new_food));
    }

    #[test]
    fn test_signal_counts_down_and_suspends_movement() {
        let snake = Snake::from_cells(&[
            Cell::new(1, 1),
            Cell::new(1, 2),
            Cell::new(2, 2),
            Cell::new(2, 1),
            Cell::new(2, 0),
        ]);
        let mut gs = GameState::from_parts(snake, Grid::EMPTY, Direction::Left, SimpleRng::new(1));

        // Up moves the head to (1, 2); segment 2 takes segment 1's old cell,
        // which is that same (1, 2).
        gs.steer(push(Direction::Up));
        assert_eq!(gs.tick(0), Some(RoundOutcome::Lose));
        assert!(gs.is_signalling());
        assert_eq!(gs.segment_count(), START_SEGMENTS);

        let head_during_signal = gs.snake().head();
        assert_eq!(gs.tick(0), None);
        assert_eq!(gs.snake().head(), head_during_signal);

        for _ in 0..SIGNAL_FRAMES {
            gs.advance_frame();
        }
        assert_eq!(gs.phase(), Phase::Running);
        assert!(gs.signal_glyph().is_none());
    }
}
