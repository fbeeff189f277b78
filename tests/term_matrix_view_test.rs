use matrix_snake::core::{Cell, GameState, Grid};
use matrix_snake::term::{MatrixView, Viewport};
use matrix_snake::types::{RoundOutcome, WIN_GLYPH};

fn screen_text(fb: &matrix_snake::term::FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
}

#[test]
fn matrix_view_renders_border_corners() {
    let snap = GameState::new().snapshot();
    let view = MatrixView::default();

    // 8 LEDs * 2 chars wide + border = 18 wide, 8 rows + border = 10 high.
    let fb = view.render(&Grid::EMPTY, &snap, Viewport::new(18, 10));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(17, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 9).unwrap().ch, '└');
    assert_eq!(fb.get(17, 9).unwrap().ch, '┘');
}

#[test]
fn matrix_view_draws_row_seven_at_the_top() {
    let snap = GameState::new().snapshot();
    let view = MatrixView::default();
    let leds = Grid::from_cell(Cell::new(0, 7)) | Grid::from_cell(Cell::new(7, 0));

    let fb = view.render(&leds, &snap, Viewport::new(18, 10));

    // (0, 7): first LED of the first inner row, two chars wide.
    assert_eq!(fb.get(1, 1).unwrap().ch, '█');
    assert_eq!(fb.get(2, 1).unwrap().ch, '█');
    // (7, 0): last LED of the last inner row.
    assert_eq!(fb.get(15, 8).unwrap().ch, '█');
    assert_eq!(fb.get(16, 8).unwrap().ch, '█');
    // Unlit LEDs show a dot.
    assert_eq!(fb.get(3, 1).unwrap().ch, '·');
}

#[test]
fn food_led_is_styled_apart_from_the_snake() {
    let gs = GameState::new();
    let snap = gs.snapshot();
    let leds = snap.frame | snap.food;
    let view = MatrixView::default();

    let fb = view.render(&leds, &snap, Viewport::new(18, 10));

    // Row 3 is inner row 4 (8 - 1 - 3) at y = 5. Head at column 2, food at 6.
    let head = fb.get(1 + 2 * 2, 5).unwrap();
    let food = fb.get(1 + 6 * 2, 5).unwrap();
    assert_eq!(head.ch, '█');
    assert_eq!(food.ch, '█');
    assert_ne!(head.style.fg, food.style.fg);
}

#[test]
fn side_panel_shows_length_and_status() {
    let mut snap = GameState::new().snapshot();
    snap.wins = 2;
    snap.signal = Some(RoundOutcome::Win);

    let view = MatrixView::default();
    let fb = view.render(&Grid::from_columns(WIN_GLYPH), &snap, Viewport::new(60, 24));
    let all = screen_text(&fb);

    assert!(all.contains("LENGTH"));
    assert!(all.contains("WINS"));
    assert!(all.contains("YOU WIN"));
    assert!(all.contains("UP"));
}

#[test]
fn narrow_viewport_skips_panel() {
    let snap = GameState::new().snapshot();
    let fb = MatrixView::default().render(&Grid::EMPTY, &snap, Viewport::new(20, 10));
    assert!(!screen_text(&fb).contains("LENGTH"));
}
