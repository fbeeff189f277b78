use criterion::{black_box, criterion_group, criterion_main, Criterion};
use matrix_snake::core::{place_food, Cell, GameState, SimpleRng, Snake};
use matrix_snake::engine::{FixedClock, GameLoop};
use matrix_snake::term::MatrixDisplay;
use matrix_snake::types::{AxisReading, InputSampler};

struct Centered;

impl InputSampler for Centered {
    fn read_axis_x(&mut self) -> i32 {
        500
    }

    fn read_axis_y(&mut self) -> i32 {
        500
    }
}

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new();

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            state.steer(black_box(AxisReading::CENTERED));
            state.tick(black_box(0));
            state.advance_frame();
        })
    });
}

fn bench_loop_iteration(c: &mut Criterion) {
    let mut game = GameLoop::new();
    let mut display = MatrixDisplay::new();
    let clock = FixedClock(0);

    c.bench_function("loop_iteration", |b| {
        b.iter(|| {
            game.iterate(&mut Centered, &mut display, &clock);
        })
    });
}

fn bench_food_on_crowded_board(c: &mut Criterion) {
    let cells: Vec<Cell> = (0..40u8).map(|i| Cell::new(i / 8, i % 8)).collect();
    let snake = Snake::from_cells(&cells);
    let mut rng = SimpleRng::new(1);
    let mut now = 0u64;

    c.bench_function("place_food_40_segments", |b| {
        b.iter(|| {
            now += 1;
            black_box(place_food(&mut rng, now, &snake));
        })
    });
}

criterion_group!(benches, bench_tick, bench_loop_iteration, bench_food_on_crowded_board);
criterion_main!(benches);
