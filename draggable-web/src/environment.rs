//! Browser clock and capability probe.

use std::time::Duration;

use draggable_core::{Clock, Environment};
use wasm_bindgen::JsValue;
use web_sys::Performance;

/// Clock backed by `performance.now()`, falling back to `Date.now()`.
#[derive(Debug, Clone)]
pub struct PerformanceClock {
    performance: Option<Performance>,
}

impl PerformanceClock {
    /// Create a clock for the current window.
    #[must_use]
    pub fn new() -> Self {
        Self {
            performance: web_sys::window().and_then(|window| window.performance()),
        }
    }
}

impl Default for PerformanceClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for PerformanceClock {
    fn now(&self) -> Duration {
        let millis = self
            .performance
            .as_ref()
            .map_or_else(js_sys::Date::now, Performance::now);
        Duration::from_secs_f64(millis.max(0.0) / 1000.0)
    }
}

/// Whether the current window exposes `PointerEvent`.
#[must_use]
pub fn supports_pointer_events() -> bool {
    web_sys::window().is_some_and(|window| {
        js_sys::Reflect::has(&window, &JsValue::from_str("PointerEvent")).unwrap_or(false)
    })
}

/// The environment for draggables running in a browser.
#[must_use]
pub fn browser_environment() -> Environment {
    Environment::new(PerformanceClock::new()).with_pointer_probe(supports_pointer_events)
}
