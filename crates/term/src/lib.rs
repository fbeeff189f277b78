//! Terminal "display adapter" module.
//!
//! Emulates the 8x8 LED matrix in a terminal so the game can be played
//! without the hardware:
//!
//! - [`MatrixDisplay`] implements [`crate::types::DisplayAdapter`] and latches
//!   what each loop iteration lit up
//! - [`MatrixView`] turns the latched LEDs plus a [`crate::core::GameSnapshot`]
//!   into a framebuffer (pure, testable)
//! - [`TerminalRenderer`] flushes framebuffers with crossterm, diffing against
//!   the previous frame
//! - [`RenderThrottle`] keeps terminal output to a sane frame rate

pub mod fb;
pub mod matrix;
pub mod matrix_view;
pub mod render_throttle;
pub mod renderer;

pub use matrix_snake_core as core;
pub use matrix_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use matrix::MatrixDisplay;
pub use matrix_view::{MatrixView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, Run, TerminalRenderer};
