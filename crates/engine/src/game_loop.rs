//! The game loop - one iteration per call, forever
//!
//! An iteration samples the joystick, moves the snake if the iteration counter
//! says so, and scans out a frame. Movement runs on its own cadence (every 51
//! iterations) so the display refreshes far more often than the snake moves.
//!
//! Rendering per iteration:
//!
//! - **Running**: the OR of all segments, then the food as a separate pass
//! - **Signalling**: the Win/Lose glyph in place of the board

use crate::core::{GameState, RandomSource, SimpleRng};
use crate::scan::scan_out;
use crate::types::{DisplayAdapter, InputSampler, RoundOutcome, TimeSource, MOVE_INTERVAL};

/// What happened during one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IterationReport {
    /// The snake moved this iteration.
    pub moved: bool,
    /// The move ended the round.
    pub outcome: Option<RoundOutcome>,
}

#[derive(Debug, Clone)]
pub struct GameLoop<R = SimpleRng> {
    state: GameState<R>,
    move_counter: u32,
    iterations: u64,
}

impl GameLoop<SimpleRng> {
    pub fn new() -> Self {
        Self::with_state(GameState::new())
    }
}

impl Default for GameLoop<SimpleRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> GameLoop<R> {
    pub fn with_state(state: GameState<R>) -> Self {
        Self {
            state,
            move_counter: 0,
            iterations: 0,
        }
    }

    pub fn state(&self) -> &GameState<R> {
        &self.state
    }

    pub fn move_counter(&self) -> u32 {
        self.move_counter
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Run one loop iteration against the given devices.
    pub fn iterate<I, D, T>(&mut self, input: &mut I, display: &mut D, clock: &T) -> IterationReport
    where
        I: InputSampler + ?Sized,
        D: DisplayAdapter + ?Sized,
        T: TimeSource + ?Sized,
    {
        let mut report = IterationReport::default();

        let reading = input.sample();
        self.state.steer(reading);

        // The move counter holds still while a glyph is up, so the first move
        // after a signal comes a full interval later.
        if !self.state.is_signalling() {
            if self.move_counter > MOVE_INTERVAL {
                report.outcome = self.state.tick(clock.now_seconds());
                report.moved = true;
                self.move_counter = 0;
            }
            self.move_counter += 1;
        }

        self.render(display);
        self.state.advance_frame();
        display.end_frame();

        self.iterations += 1;
        report
    }

    fn render<D: DisplayAdapter + ?Sized>(&self, display: &mut D) {
        match self.state.signal_glyph() {
            Some(glyph) => scan_out(display, &glyph),
            None => {
                scan_out(display, &self.state.compose_frame());
                scan_out(display, &self.state.food());
            }
        }
    }

    /// Iterate forever. Only power-down (or the process dying) ends this.
    pub fn run<I, D, T>(&mut self, input: &mut I, display: &mut D, clock: &T) -> !
    where
        I: InputSampler + ?Sized,
        D: DisplayAdapter + ?Sized,
        T: TimeSource + ?Sized,
    {
        log::info!("game loop running");
        loop {
            self.iterate(input, display, clock);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::core::Cell;
    use crate::types::{AxisReading, Direction, SIGNAL_FRAMES};

    struct Stick(AxisReading);

    impl InputSampler for Stick {
        fn read_axis_x(&mut self) -> i32 {
            self.0.x
        }

        fn read_axis_y(&mut self) -> i32 {
            self.0.y
        }
    }

    #[derive(Default)]
    struct CountingDisplay {
        selects: usize,
        frames: usize,
    }

    impl DisplayAdapter for CountingDisplay {
        fn set_column_select(&mut self, _col_mask: u8) {
            self.selects += 1;
        }

        fn write_row_pattern(&mut self, _row_mask: u8) {}

        fn end_frame(&mut self) {
            self.frames += 1;
        }
    }

    #[test]
    fn moves_once_every_51_iterations() {
        let mut game = GameLoop::new();
        let mut stick = Stick(AxisReading::CENTERED);
        let mut display = CountingDisplay::default();
        let clock = FixedClock(0);

        let mut moves = Vec::new();
        for i in 0..200u32 {
            if game.iterate(&mut stick, &mut display, &clock).moved {
                moves.push(i);
            }
        }
        assert_eq!(moves, vec![51, 102, 153]);
        assert_eq!(game.state().ticks(), 3);
    }

    #[test]
    fn renders_board_and_food_every_iteration() {
        let mut game = GameLoop::new();
        let mut stick = Stick(AxisReading::CENTERED);
        let mut display = CountingDisplay::default();

        game.iterate(&mut stick, &mut display, &FixedClock(0));
        // Snake pass plus food pass, eight columns each.
        assert_eq!(display.selects, 16);
        assert_eq!(display.frames, 1);
    }

    #[test]
    fn input_is_latched_between_moves() {
        let mut game = GameLoop::new();
        let mut display = CountingDisplay::default();
        let clock = FixedClock(0);

        // Push right briefly, then release well before the move.
        let mut stick = Stick(AxisReading::new(1000, 500));
        game.iterate(&mut stick, &mut display, &clock);
        stick.0 = AxisReading::CENTERED;
        for _ in 0..60 {
            game.iterate(&mut stick, &mut display, &clock);
        }

        assert_eq!(game.state().direction(), Direction::Right);
        assert_eq!(game.state().snake().head().cell(), Some(Cell::new(3, 3)));
    }

    #[test]
    fn signal_renders_glyph_only_and_pauses_movement() {
        use crate::core::{Grid, Snake, SimpleRng};

        let snake = Snake::from_cells(&[
            Cell::new(1, 1),
            Cell::new(1, 2),
            Cell::new(2, 2),
            Cell::new(2, 1),
            Cell::new(2, 0),
        ]);
        let state = GameState::from_parts(snake, Grid::EMPTY, Direction::Left, SimpleRng::new(1));
        let mut game = GameLoop::with_state(state);
        let mut stick = Stick(AxisReading::new(500, 1000));
        let mut display = CountingDisplay::default();
        let clock = FixedClock(0);

        let mut outcome = None;
        while outcome.is_none() {
            outcome = game.iterate(&mut stick, &mut display, &clock).outcome;
        }
        assert_eq!(outcome, Some(RoundOutcome::Lose));

        let selects_before = display.selects;
        game.iterate(&mut stick, &mut display, &clock);
        assert_eq!(display.selects - selects_before, 8);

        let ticks = game.state().ticks();
        for _ in 0..SIGNAL_FRAMES {
            assert!(!game.iterate(&mut stick, &mut display, &clock).moved);
        }
        assert_eq!(game.state().ticks(), ticks);
        assert!(!game.state().is_signalling());
    }
}
