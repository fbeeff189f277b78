//! Game loop module - drives the core against real (or emulated) devices.
//!
//! The loop is single-threaded and never blocks on anything but the device
//! writes themselves. Devices are plugged in through the traits in
//! [`crate::types`]: [`DisplayAdapter`](crate::types::DisplayAdapter),
//! [`InputSampler`](crate::types::InputSampler) and
//! [`TimeSource`](crate::types::TimeSource).

pub mod clock;
pub mod game_loop;
pub mod scan;

pub use matrix_snake_core as core;
pub use matrix_snake_types as types;

pub use clock::{FixedClock, SystemClock};
pub use game_loop::{GameLoop, IterationReport};
pub use scan::scan_out;
