//! Matrix snake (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so the binary, the
//! integration tests and the benchmarks share one import path:
//! `matrix_snake::{core, engine, input, term, types}`.

pub use matrix_snake_core as core;
pub use matrix_snake_engine as engine;
pub use matrix_snake_input as input;
pub use matrix_snake_term as term;
pub use matrix_snake_types as types;
