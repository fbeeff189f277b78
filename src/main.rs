//! Terminal matrix snake runner (default binary).
//!
//! Plays the LED-matrix snake in a terminal: the keyboard stands in for the
//! joystick and an emulated 8x8 matrix stands in for the display. The game
//! loop itself is the same one that drives the hardware.

mod config;
mod logger;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use matrix_snake::core::{GameSnapshot, Grid};
use matrix_snake::engine::{GameLoop, SystemClock};
use matrix_snake::input::{should_quit, KeyboardJoystick};
use matrix_snake::term::{FrameBuffer, MatrixDisplay, MatrixView, RenderThrottle, TerminalRenderer, Viewport};

use crate::config::Config;

/// Terminal frame-rate cap and forced-refresh period.
const MIN_FRAME_MS: u64 = 16;
const MAX_FRAME_MS: u64 = 500;

fn main() -> Result<()> {
    let config = Config::from_env();
    logger::init(&config)?;
    log::info!("matrix snake ready ({}ms per iteration)", config.iteration_ms);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    log::info!("matrix snake stopped");
    result
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut game = GameLoop::new();
    let mut stick = KeyboardJoystick::new().with_key_release_timeout_ms(config.key_release_ms);
    let mut display = MatrixDisplay::new();
    let clock = SystemClock;

    let view = MatrixView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(MIN_FRAME_MS, MAX_FRAME_MS);

    let started = Instant::now();
    let iteration = Duration::from_millis(config.iteration_ms);
    let mut next_iteration = Instant::now();

    loop {
        // Drain input until the next iteration is due.
        let timeout = next_iteration.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        stick.handle_key_press(key.code);
                    }
                    KeyEventKind::Release => stick.handle_key_release(key.code),
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
            continue;
        }

        // Schedule from now rather than from the missed deadline, so a slow
        // terminal write never turns into a burst of catch-up iterations.
        next_iteration = Instant::now() + iteration;

        stick.update();
        game.iterate(&mut stick, &mut display, &clock);

        let leds = display.latched();
        let snap = game.state().snapshot();
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, fingerprint(&leds, &snap)) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&leds, &snap, Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
        }
    }
}

fn fingerprint(leds: &Grid, snap: &GameSnapshot) -> u64 {
    let mut h = DefaultHasher::new();
    leds.hash(&mut h);
    snap.hash(&mut h);
    h.finish()
}
