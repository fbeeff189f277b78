//! Virtual joystick driven by key presses.
//!
//! A direction key pushes the stick fully to that side; the stick springs back
//! to centre on key release, or after a timeout on terminals that do not emit
//! release events.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use crate::map::direction_for_code;
use crate::types::{AxisReading, Direction, InputSampler, AXIS_CENTER, AXIS_MAX, AXIS_MIN};

// A held key auto-repeats well inside this window on common terminals, so a
// held key keeps the stick deflected while a tap centres it soon after.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

#[derive(Debug, Clone)]
pub struct KeyboardJoystick {
    held: Option<Direction>,
    last_key_time: Instant,
    key_release_timeout_ms: u32,
}

impl KeyboardJoystick {
    pub fn new() -> Self {
        Self {
            held: None,
            last_key_time: Instant::now(),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn held(&self) -> Option<Direction> {
        self.held
    }

    /// Deflect the stick. Returns the direction if the key is a direction key.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<Direction> {
        let dir = direction_for_code(code)?;
        self.held = Some(dir);
        self.last_key_time = Instant::now();
        Some(dir)
    }

    /// Centre the stick if `code` is the key currently holding it.
    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(dir) = direction_for_code(code) {
            if self.held == Some(dir) {
                self.held = None;
            }
        }
    }

    /// Auto-centre a stale deflection.
    pub fn update(&mut self) {
        let timeout = Duration::from_millis(self.key_release_timeout_ms as u64);
        if self.held.is_some() && self.last_key_time.elapsed() > timeout {
            self.held = None;
        }
    }

    pub fn reset(&mut self) {
        self.held = None;
        self.last_key_time = Instant::now();
    }

    /// The reading the stick currently produces.
    pub fn reading(&self) -> AxisReading {
        match self.held {
            Some(Direction::Up) => AxisReading::new(AXIS_CENTER, AXIS_MAX),
            Some(Direction::Down) => AxisReading::new(AXIS_CENTER, AXIS_MIN),
            Some(Direction::Left) => AxisReading::new(AXIS_MIN, AXIS_CENTER),
            Some(Direction::Right) => AxisReading::new(AXIS_MAX, AXIS_CENTER),
            None => AxisReading::CENTERED,
        }
    }
}

impl Default for KeyboardJoystick {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSampler for KeyboardJoystick {
    fn read_axis_x(&mut self) -> i32 {
        self.reading().x
    }

    fn read_axis_y(&mut self) -> i32 {
        self.reading().y
    }
}
