//! Terminal input module.
//!
//! Stands in for the analog joystick: keyboard keys deflect a virtual stick,
//! and the stick is read through [`crate::types::InputSampler`] exactly like
//! the hardware one. Terminals that never report key releases are handled with
//! an auto-centre timeout.

pub mod joystick;
pub mod map;

pub use matrix_snake_types as types;

pub use joystick::KeyboardJoystick;
pub use map::{direction_for_code, handle_key_event, should_quit};
