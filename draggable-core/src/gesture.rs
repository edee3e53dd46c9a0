//! The press/drag/release state machine.
//!
//! ```text
//!          press                release / cancel
//!   Idle ─────────► Pressed ───────────────────► Idle
//!                   │    ▲
//!                   └────┘ drag
//! ```
//!
//! Adapters only request transitions; the machine owns [`GestureState`]
//! and decides whether a request is accepted.

use serde::Serialize;

use crate::config::GestureHandlers;
use crate::event::{CanonicalEvent, Modality, Modifiers, NativeEvent, Point};

/// Coordinates and modifiers of the primary contact, extracted by an
/// adapter from a native event.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sample {
    /// Document coordinates.
    pub page: Point,
    /// Viewport coordinates.
    pub client: Point,
    /// Active modifier keys.
    pub modifiers: Modifiers,
}

/// State of the single gesture a binding may track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GestureState {
    press_origin: Option<Point>,
    active_modality: Option<Modality>,
}

impl GestureState {
    /// Page coordinates of the press that started the gesture.
    #[must_use]
    pub const fn press_origin(&self) -> Option<Point> {
        self.press_origin
    }

    /// The modality that owns the live gesture.
    #[must_use]
    pub const fn active_modality(&self) -> Option<Modality> {
        self.active_modality
    }

    /// Whether a gesture is in progress.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active_modality.is_some()
    }

    fn owned_by(&self, modality: Modality) -> bool {
        self.active_modality == Some(modality)
    }
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Press,
    Drag,
    Release,
}

/// Tracks one gesture and invokes the consumer callbacks.
#[derive(Debug, Default)]
pub struct GestureStateMachine {
    state: GestureState,
    handlers: GestureHandlers,
    torn_down: bool,
}

impl GestureStateMachine {
    /// Create an idle machine with the given callbacks.
    #[must_use]
    pub fn new(handlers: GestureHandlers) -> Self {
        Self {
            state: GestureState::default(),
            handlers,
            torn_down: false,
        }
    }

    /// Current gesture state.
    #[must_use]
    pub const fn state(&self) -> &GestureState {
        &self.state
    }

    /// Whether [`Self::tear_down`] has been called.
    #[must_use]
    pub const fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Replace the callbacks. The gesture in progress is kept.
    pub fn set_handlers(&mut self, handlers: GestureHandlers) {
        self.handlers = handlers;
    }

    /// `Idle -> Pressed`. Rejected while a gesture is active.
    pub fn press(&mut self, modality: Modality, sample: Sample, original: &NativeEvent) -> bool {
        if self.torn_down || self.state.is_active() {
            return false;
        }
        self.state = GestureState {
            press_origin: Some(sample.page),
            active_modality: Some(modality),
        };
        tracing::trace!(?modality, x = sample.page.x, y = sample.page.y, "gesture pressed");
        self.emit(Phase::Press, modality, sample, None, original);
        true
    }

    /// `Pressed -> Pressed`. Rejected while idle or for a foreign modality.
    pub fn drag(&mut self, modality: Modality, sample: Sample, original: &NativeEvent) -> bool {
        if self.torn_down || !self.state.owned_by(modality) {
            return false;
        }
        let origin = self.state.press_origin;
        self.emit(Phase::Drag, modality, sample, origin, original);
        true
    }

    /// `Pressed -> Idle`, firing the release callback.
    pub fn release(&mut self, modality: Modality, sample: Sample, original: &NativeEvent) -> bool {
        self.end(modality, sample, original, "released")
    }

    /// `Pressed -> Idle` on a platform cancel. Fires the release callback
    /// once; repeated cancels are no-ops.
    pub fn cancel(&mut self, modality: Modality, sample: Sample, original: &NativeEvent) -> bool {
        self.end(modality, sample, original, "cancelled")
    }

    /// Drop the gesture in progress without firing callbacks.
    pub fn reset(&mut self) {
        self.state = GestureState::default();
    }

    /// Enter the terminal state: no transition is accepted afterwards and
    /// the callbacks are released.
    pub fn tear_down(&mut self) {
        self.torn_down = true;
        self.state = GestureState::default();
        self.handlers = GestureHandlers::default();
    }

    fn end(
        &mut self,
        modality: Modality,
        sample: Sample,
        original: &NativeEvent,
        reason: &'static str,
    ) -> bool {
        if self.torn_down || !self.state.owned_by(modality) {
            return false;
        }
        let origin = self.state.press_origin;
        self.state = GestureState::default();
        tracing::trace!(?modality, reason, "gesture ended");
        self.emit(Phase::Release, modality, sample, origin, original);
        true
    }

    fn emit(
        &mut self,
        phase: Phase,
        modality: Modality,
        sample: Sample,
        origin: Option<Point>,
        original: &NativeEvent,
    ) {
        let handler = match phase {
            Phase::Press => self.handlers.press.as_mut(),
            Phase::Drag => self.handlers.drag.as_mut(),
            Phase::Release => self.handlers.release.as_mut(),
        };
        let Some(handler) = handler else {
            return;
        };
        let event = CanonicalEvent {
            page_x: sample.page.x,
            page_y: sample.page.y,
            client_x: sample.client.x,
            client_y: sample.client.y,
            offset_x: origin.map(|o| sample.page.x - o.x),
            offset_y: origin.map(|o| sample.page.y - o.y),
            is_touch: modality == Modality::Touch,
            shift_key: sample.modifiers.shift,
            ctrl_key: sample.modifiers.ctrl,
            alt_key: sample.modifiers.alt,
            original_event: original,
        };
        handler(&event);
    }
}
