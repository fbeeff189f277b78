//! MatrixView: draws the emulated LED matrix and a status panel.
//!
//! Pure (no I/O), so layouts can be unit-tested. Row 7 is drawn at the top so
//! that moving Up on the stick moves the snake up the screen.

use crate::core::{Cell, GameSnapshot, Grid};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{RoundOutcome, GRID_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const PANEL_GAP: u16 = 2;
const PANEL_MIN_W: u16 = 12;

const LED_ON: CellStyle = CellStyle::plain(Rgb::new(255, 60, 40), Rgb::new(20, 10, 10));
const LED_FOOD: CellStyle = CellStyle::plain(Rgb::new(255, 200, 60), Rgb::new(20, 10, 10));
const LED_OFF: CellStyle = CellStyle::plain(Rgb::new(70, 40, 40), Rgb::new(20, 10, 10));
const BORDER: CellStyle = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const LABEL: CellStyle = CellStyle::plain(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0));
const VALUE: CellStyle = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

pub struct MatrixView {
    /// LED width in terminal columns.
    cell_w: u16,
    /// LED height in terminal rows.
    cell_h: u16,
}

impl Default for MatrixView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl MatrixView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Outer size of the bordered matrix.
    pub fn frame_size(&self) -> (u16, u16) {
        let side = GRID_SIZE as u16;
        (side * self.cell_w + 2, side * self.cell_h + 2)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// `leds` is what the display currently shows; `snap` supplies the panel
    /// and tells food LEDs apart from the snake.
    pub fn render_into(&self, leds: &Grid, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        draw_border(fb, start_x, start_y, frame_w, frame_h);

        for col in 0..GRID_SIZE as u8 {
            for row in 0..GRID_SIZE as u8 {
                let cell = Cell::new(col, row);
                let (ch, style) = if !leds.is_lit(cell) {
                    ('·', LED_OFF.dim())
                } else if snap.signal.is_none() && snap.food.is_lit(cell) {
                    ('█', LED_FOOD.bold())
                } else {
                    ('█', LED_ON.bold())
                };
                let px = start_x + 1 + col as u16 * self.cell_w;
                let py = start_y + 1 + (GRID_SIZE as u16 - 1 - row as u16) * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, style.cell(ch));
            }
        }

        self.draw_panel(fb, snap, viewport, start_x + frame_w + PANEL_GAP, start_y);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, leds: &Grid, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(leds, snap, viewport, &mut fb);
        fb
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, x: u16, top: u16) {
        if x >= viewport.width || viewport.width - x < PANEL_MIN_W {
            return;
        }

        let status = match snap.signal {
            Some(RoundOutcome::Win) => "YOU WIN",
            Some(RoundOutcome::Lose) => "GAME OVER",
            None => "PLAYING",
        };

        let fields = [
            ("LENGTH", snap.segment_count.to_string()),
            ("BEST", snap.best_length.to_string()),
            ("WINS", snap.wins.to_string()),
            ("LOSSES", snap.losses.to_string()),
            ("HEADING", snap.direction.as_str().to_uppercase()),
            ("STATUS", status.to_string()),
        ];

        let mut y = top;
        for (label, value) in fields.iter() {
            if y.saturating_add(1) >= viewport.height {
                break;
            }
            fb.put_str(x, y, label, LABEL.bold());
            fb.put_str(x, y + 1, value, VALUE);
            y = y.saturating_add(3);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }

    let right = x + w - 1;
    let bottom = y + h - 1;
    fb.set(x, y, BORDER.cell('┌'));
    fb.set(right, y, BORDER.cell('┐'));
    fb.set(x, bottom, BORDER.cell('└'));
    fb.set(right, bottom, BORDER.cell('┘'));

    for dx in x + 1..right {
        fb.set(dx, y, BORDER.cell('─'));
        fb.set(dx, bottom, BORDER.cell('─'));
    }
    for dy in y + 1..bottom {
        fb.set(x, dy, BORDER.cell('│'));
        fb.set(right, dy, BORDER.cell('│'));
    }
}
