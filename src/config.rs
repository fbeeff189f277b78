//! Runtime configuration from environment variables.
//!
//! Every knob has a default; unparsable values fall back to it.

use std::env;
use std::path::PathBuf;

use log::LevelFilter;

use matrix_snake::input::joystick::DEFAULT_KEY_RELEASE_TIMEOUT_MS;

/// Wall time per loop iteration. 51 iterations per move gives ~200ms per cell.
pub const DEFAULT_ITERATION_MS: u64 = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub iteration_ms: u64,
    pub key_release_ms: u32,
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            iteration_ms: DEFAULT_ITERATION_MS,
            key_release_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Load from `SNAKE_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let iteration_ms = lookup("SNAKE_ITERATION_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(defaults.iteration_ms);

        let key_release_ms = lookup("SNAKE_KEY_RELEASE_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(defaults.key_release_ms);

        let log_path = lookup("SNAKE_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let log_level = lookup("SNAKE_LOG_LEVEL")
            .and_then(|s| s.trim().parse::<LevelFilter>().ok())
            .unwrap_or(defaults.log_level);

        Self {
            iteration_ms,
            key_release_ms,
            log_path,
            log_level,
        }
    }
}
