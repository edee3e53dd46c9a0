//! Suppression of mouse events that browsers emulate after touch.
//!
//! After every touch sequence a browser replays it as `mousedown` /
//! `mouseup` for the sake of mouse-only pages. Without suppression one tap
//! would fire press and release twice.

use std::time::Duration;

/// Default suppression window after a touch release.
pub const DEFAULT_SUPPRESSION_WINDOW: Duration = Duration::from_millis(2000);

/// Tracks the most recent touch release of one binding.
#[derive(Debug, Clone)]
pub struct EmulationGuard {
    window: Duration,
    last_touch_end: Option<Duration>,
}

impl EmulationGuard {
    /// Create a guard with the given suppression window.
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            last_touch_end: None,
        }
    }

    /// The configured window.
    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Change the window without forgetting the last touch release.
    pub fn set_window(&mut self, window: Duration) {
        self.window = window;
    }

    /// Record a touch release at `now`.
    pub fn touch_ended(&mut self, now: Duration) {
        self.last_touch_end = Some(now);
    }

    /// Whether a mouse press at `now` should be treated as emulated.
    #[must_use]
    pub fn suppresses_mouse(&self, now: Duration) -> bool {
        self.last_touch_end
            .is_some_and(|ended| now.saturating_sub(ended) < self.window)
    }

    /// Forget any recorded touch release.
    pub fn reset(&mut self) {
        self.last_touch_end = None;
    }
}

impl Default for EmulationGuard {
    fn default() -> Self {
        Self::new(DEFAULT_SUPPRESSION_WINDOW)
    }
}
