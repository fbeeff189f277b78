//! Game loop driven end to end with the terminal display emulator.

use matrix_snake::core::{Cell, GameState, Grid, SimpleRng, Snake};
use matrix_snake::engine::{FixedClock, GameLoop};
use matrix_snake::term::MatrixDisplay;
use matrix_snake::types::{
    AxisReading, Direction, InputSampler, RoundOutcome, LOSE_GLYPH, MOVE_INTERVAL, SIGNAL_FRAMES,
    WIN_GLYPH,
};

/// A stick held in one position.
struct HeldStick(AxisReading);

impl InputSampler for HeldStick {
    fn read_axis_x(&mut self) -> i32 {
        self.0.x
    }

    fn read_axis_y(&mut self) -> i32 {
        self.0.y
    }
}

fn run_until_move<I: InputSampler>(game: &mut GameLoop, stick: &mut I, display: &mut MatrixDisplay) {
    for _ in 0..=MOVE_INTERVAL + 1 {
        if game.iterate(stick, display, &FixedClock(0)).moved {
            return;
        }
    }
    panic!("no move within one interval");
}

#[test]
fn display_shows_snake_and_food_together() {
    let mut game = GameLoop::new();
    let mut stick = HeldStick(AxisReading::CENTERED);
    let mut display = MatrixDisplay::new();

    game.iterate(&mut stick, &mut display, &FixedClock(0));

    let expected = Grid::from_cell(Cell::new(2, 3))
        | Grid::from_cell(Cell::new(3, 3))
        | Grid::from_cell(Cell::new(4, 3))
        | Grid::from_cell(Cell::new(6, 3));
    assert_eq!(display.latched(), expected);
}

#[test]
fn display_follows_the_snake() {
    let mut game = GameLoop::new();
    let mut stick = HeldStick(AxisReading::new(500, 0));
    let mut display = MatrixDisplay::new();

    // Down is a reversal of the initial Up, so the snake keeps going Up.
    run_until_move(&mut game, &mut stick, &mut display);
    assert_eq!(game.state().direction(), Direction::Up);
    assert!(display.latched().is_lit(Cell::new(2, 4)));
    assert!(!display.latched().is_lit(Cell::new(4, 3)));

    stick.0 = AxisReading::new(0, 500);
    run_until_move(&mut game, &mut stick, &mut display);
    assert_eq!(game.state().direction(), Direction::Left);
    assert!(display.latched().is_lit(Cell::new(1, 4)));
}

#[test]
fn lose_shows_x_then_resumes_with_three_segments() {
    let snake = Snake::from_cells(&[
        Cell::new(2, 2),
        Cell::new(1, 2),
        Cell::new(1, 3),
        Cell::new(2, 3),
        Cell::new(3, 3),
    ]);
    let state = GameState::from_parts(snake, Grid::from_cell(Cell::new(7, 7)), Direction::Down, SimpleRng::new(1));
    let mut game = GameLoop::with_state(state);
    let mut stick = HeldStick(AxisReading::new(0, 500));
    let mut display = MatrixDisplay::new();

    let mut outcome = None;
    for _ in 0..=MOVE_INTERVAL + 1 {
        outcome = outcome.or(game.iterate(&mut stick, &mut display, &FixedClock(0)).outcome);
    }
    assert_eq!(outcome, Some(RoundOutcome::Lose));
    assert_eq!(display.latched(), Grid::from_columns(LOSE_GLYPH));
    assert_eq!(game.state().segment_count(), 3);

    for _ in 0..SIGNAL_FRAMES {
        game.iterate(&mut stick, &mut display, &FixedClock(0));
    }
    assert!(!game.state().is_signalling());
    assert_ne!(display.latched(), Grid::from_columns(LOSE_GLYPH));
    assert!(display.latched().is_lit(Cell::new(7, 7)), "food is back on screen");
}

#[test]
fn input_keeps_being_sampled_during_signal() {
    let mut cells = vec![Cell::new(0, 0)];
    for i in 0..38u8 {
        cells.push(Cell::new(1 + i / 8, i % 8));
    }
    let state = GameState::from_parts(
        Snake::from_cells(&cells),
        Grid::from_cell(Cell::new(0, 1)),
        Direction::Up,
        SimpleRng::new(9),
    );
    let mut game = GameLoop::with_state(state);
    let mut stick = HeldStick(AxisReading::CENTERED);
    let mut display = MatrixDisplay::new();

    let mut outcome = None;
    while outcome.is_none() {
        outcome = game.iterate(&mut stick, &mut display, &FixedClock(77)).outcome;
    }
    assert_eq!(outcome, Some(RoundOutcome::Win));
    assert_eq!(display.latched(), Grid::from_columns(WIN_GLYPH));

    // A turn requested mid-signal is remembered for the first move after it.
    stick.0 = AxisReading::new(1000, 500);
    game.iterate(&mut stick, &mut display, &FixedClock(77));
    stick.0 = AxisReading::CENTERED;
    assert_eq!(game.state().pending_turn(), Some(Direction::Right));

    while game.state().is_signalling() {
        game.iterate(&mut stick, &mut display, &FixedClock(77));
    }
    run_until_move(&mut game, &mut stick, &mut display);
    assert_eq!(game.state().direction(), Direction::Right);
}
