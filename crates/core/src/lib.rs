//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains every game rule of the matrix snake. It has **no**
//! dependencies on displays, joysticks or clocks: the loop hands it joystick
//! readings and the current time in seconds, and reads back grids to display.
//!
//! # Module Structure
//!
//! - [`grid`]: 8x8 occupancy grid stored as column bytes, with wrapping shifts
//! - [`snake`]: Ordered segment list (head first) with shift-register movement
//! - [`steering`]: Joystick normalisation, dead zone and reversal rejection
//! - [`collision`]: Food, self-collision and win checks
//! - [`food`]: Food placement that never lands on the snake
//! - [`rng`]: Reseedable LCG used by food placement
//! - [`game_state`]: Round lifecycle tying the above together
//!
//! # Game Rules
//!
//! - **Movement**: One cell per tick; leaving an edge re-enters on the opposite edge
//! - **Steering**: The stronger joystick axis wins; 180° turns are ignored
//! - **Food**: Eating grows the snake by one segment and respawns the food
//! - **Lose**: The head lands on a body segment
//! - **Win**: The snake reaches 40 segments
//! - **Signal**: After Win/Lose a glyph shows for 1000 iterations, length resets to 3
//!
//! # Example
//!
//! ```
//! use matrix_snake_core::{Cell, GameState};
//! use matrix_snake_core::types::{AxisReading, Direction};
//!
//! let mut game = GameState::new();
//!
//! // Push the stick left, then let the loop tick.
//! game.steer(AxisReading::new(0, 500));
//! game.tick(0);
//!
//! assert_eq!(game.direction(), Direction::Left);
//! assert_eq!(game.snake().head().cell(), Some(Cell::new(1, 3)));
//! ```

pub mod collision;
pub mod food;
pub mod game_state;
pub mod grid;
pub mod rng;
pub mod snake;
pub mod snapshot;
pub mod steering;

pub use matrix_snake_types as types;

// Re-export commonly used types for convenience
pub use collision::Collision;
pub use food::place_food;
pub use game_state::{GameState, Phase, RoundStats};
pub use grid::{Cell, Grid};
pub use rng::{RandomSource, SimpleRng};
pub use snake::Snake;
pub use snapshot::GameSnapshot;
