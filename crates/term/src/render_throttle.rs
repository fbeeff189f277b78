//! Caps how often frames reach the terminal.
//!
//! The game loop iterates hundreds of times per second; the terminal only
//! needs a new frame when the picture changes, and never faster than a
//! display refresh.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_interval_ms: u64,
    max_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    /// `min_interval_ms` caps the frame rate; `max_interval_ms` forces a
    /// periodic redraw even when nothing changed.
    pub fn new(min_interval_ms: u64, max_interval_ms: u64) -> Self {
        Self {
            min_interval_ms,
            max_interval_ms: max_interval_ms.max(min_interval_ms),
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Decide whether to present a frame with `fingerprint` at `now_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let elapsed = now_ms.saturating_sub(self.last_render_ms);
        let render = if !self.has_rendered {
            true
        } else if elapsed < self.min_interval_ms {
            false
        } else {
            fingerprint != self.last_fingerprint || elapsed >= self.max_interval_ms
        };

        if render {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
        }
        render
    }
}
