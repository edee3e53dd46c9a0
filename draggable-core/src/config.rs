//! Draggable configuration: callbacks, options and the host environment.

use std::rc::Rc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::error::DraggableResult;
use crate::event::CanonicalEvent;
use crate::guard::DEFAULT_SUPPRESSION_WINDOW;

/// A consumer callback for one gesture phase.
pub type GestureHandler = Box<dyn FnMut(&CanonicalEvent<'_>)>;

/// Plain options, loadable from JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DraggableOptions {
    /// Only listen to mouse events; touch and pointer are never attached.
    pub mouse_only: bool,
    /// How long mouse presses stay suppressed after a touch release.
    pub suppression_window_ms: u64,
}

impl DraggableOptions {
    /// Parse options from a JSON object. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> DraggableResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The suppression window as a duration.
    #[must_use]
    pub const fn suppression_window(&self) -> Duration {
        Duration::from_millis(self.suppression_window_ms)
    }
}

impl Default for DraggableOptions {
    fn default() -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let suppression_window_ms = DEFAULT_SUPPRESSION_WINDOW.as_millis() as u64;
        Self {
            mouse_only: false,
            suppression_window_ms,
        }
    }
}

/// The three gesture callbacks.
#[derive(Default)]
pub struct GestureHandlers {
    pub(crate) press: Option<GestureHandler>,
    pub(crate) drag: Option<GestureHandler>,
    pub(crate) release: Option<GestureHandler>,
}

impl std::fmt::Debug for GestureHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureHandlers")
            .field("press", &self.press.is_some())
            .field("drag", &self.drag.is_some())
            .field("release", &self.release.is_some())
            .finish()
    }
}

/// Configuration passed to [`crate::Draggable::new`] and
/// [`crate::Draggable::update`].
///
/// ```
/// use draggable_core::DraggableConfig;
///
/// let config = DraggableConfig::new()
///     .on_drag(|event| println!("moved by {:?}", event.offset_x))
///     .mouse_only(true);
/// assert!(config.options().mouse_only);
/// ```
#[derive(Debug, Default)]
pub struct DraggableConfig {
    handlers: GestureHandlers,
    options: DraggableOptions,
}

impl DraggableConfig {
    /// Create a configuration with no callbacks and default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the press callback.
    #[must_use]
    pub fn on_press(mut self, handler: impl FnMut(&CanonicalEvent<'_>) + 'static) -> Self {
        self.handlers.press = Some(Box::new(handler));
        self
    }

    /// Set the drag callback.
    #[must_use]
    pub fn on_drag(mut self, handler: impl FnMut(&CanonicalEvent<'_>) + 'static) -> Self {
        self.handlers.drag = Some(Box::new(handler));
        self
    }

    /// Set the release callback.
    #[must_use]
    pub fn on_release(mut self, handler: impl FnMut(&CanonicalEvent<'_>) + 'static) -> Self {
        self.handlers.release = Some(Box::new(handler));
        self
    }

    /// Restrict the binding to mouse events.
    #[must_use]
    pub fn mouse_only(mut self, mouse_only: bool) -> Self {
        self.options.mouse_only = mouse_only;
        self
    }

    /// Replace all options.
    #[must_use]
    pub fn options_from(mut self, options: DraggableOptions) -> Self {
        self.options = options;
        self
    }

    /// The configured options.
    #[must_use]
    pub const fn options(&self) -> &DraggableOptions {
        &self.options
    }

    pub(crate) fn into_parts(self) -> (GestureHandlers, DraggableOptions) {
        (self.handlers, self.options)
    }
}

/// Host capabilities consulted by a draggable.
///
/// Both parts are injectable so tests and alternative hosts can swap them
/// per instance.
#[derive(Clone)]
pub struct Environment {
    clock: Rc<dyn Clock>,
    pointer_probe: Rc<dyn Fn() -> bool>,
}

impl Environment {
    /// Create an environment from a clock; pointer events are reported as
    /// unsupported until a probe is installed.
    #[must_use]
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Rc::new(clock),
            pointer_probe: Rc::new(|| false),
        }
    }

    /// Replace the pointer event capability probe.
    #[must_use]
    pub fn with_pointer_probe(mut self, probe: impl Fn() -> bool + 'static) -> Self {
        self.pointer_probe = Rc::new(probe);
        self
    }

    /// Replace the clock.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Rc::new(clock);
        self
    }

    /// Whether the host delivers pointer events.
    #[must_use]
    pub fn supports_pointer_events(&self) -> bool {
        (self.pointer_probe)()
    }

    /// Current time on the environment clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.now()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for Environment {
    fn default() -> Self {
        Self::new(crate::clock::SystemClock::new())
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("now", &self.clock.now())
            .field("pointer_events", &self.supports_pointer_events())
            .finish()
    }
}
