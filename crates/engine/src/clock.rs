use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::TimeSource;

/// Seconds since the Unix epoch from the host clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now_seconds(&self) -> u64 {
        // A clock set before 1970 still seeds food placement, just predictably.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

/// A clock stuck at one instant (tests, replays).
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedClock(pub u64);

impl TimeSource for FixedClock {
    fn now_seconds(&self) -> u64 {
        self.0
    }
}
