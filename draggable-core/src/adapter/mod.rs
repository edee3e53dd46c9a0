//! Per-modality adapters.
//!
//! Each adapter listens to one native event family, drops the noise that
//! family is known for and asks the [`GestureStateMachine`] for
//! transitions. Adapters never touch [`crate::GestureState`] directly.

mod mouse;
mod pointer;
mod touch;

use std::time::Duration;

pub use mouse::MouseAdapter;
pub use pointer::PointerAdapter;
pub use touch::TouchAdapter;

use crate::event::{Modality, NativeEvent};
use crate::gesture::GestureStateMachine;
use crate::guard::EmulationGuard;
use crate::surface::Listeners;

/// Everything an adapter may use while handling one native event.
pub struct AdapterContext<'a> {
    /// The binding's state machine.
    pub machine: &'a mut GestureStateMachine,
    /// The binding's listener registry.
    pub listeners: &'a mut Listeners,
    /// The binding's emulated mouse guard.
    pub guard: &'a mut EmulationGuard,
    /// Current time on the environment clock.
    pub now: Duration,
}

/// Turns one native event family into gesture transitions.
pub trait ModalityAdapter {
    /// The family this adapter handles.
    fn modality(&self) -> Modality;

    /// Register the listeners needed to detect a press.
    fn attach(&mut self, listeners: &mut Listeners);

    /// Handle one event of this adapter's family. Returns whether the
    /// event produced a transition.
    fn handle(&mut self, event: &NativeEvent, cx: &mut AdapterContext<'_>) -> bool;
}

/// Build the adapter set for a binding.
///
/// `mouse_only` wins over everything; otherwise pointer events replace
/// mouse and touch when the host supports them.
#[must_use]
pub fn select(mouse_only: bool, pointer_events: bool) -> Vec<Box<dyn ModalityAdapter>> {
    if mouse_only {
        vec![Box::new(MouseAdapter::new())]
    } else if pointer_events {
        vec![Box::new(PointerAdapter::new())]
    } else {
        vec![Box::new(MouseAdapter::new()), Box::new(TouchAdapter::new())]
    }
}
