//! Mouse events.

use super::{AdapterContext, ModalityAdapter};
use crate::event::{EventKind, Modality, MouseInput, NativeEvent, NativePayload, PRIMARY_BUTTON};
use crate::gesture::Sample;
use crate::surface::{ListenerScope, Listeners};

/// Move and up are tracked on the document so a drag survives leaving
/// the element.
const TRACKING: [EventKind; 2] = [EventKind::MouseMove, EventKind::MouseUp];

/// Adapter for `mousedown` / `mousemove` / `mouseup`.
#[derive(Debug, Default)]
pub struct MouseAdapter;

impl MouseAdapter {
    /// Create a mouse adapter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn sample(input: &MouseInput) -> Sample {
        Sample {
            page: input.page,
            client: input.client,
            modifiers: input.modifiers,
        }
    }
}

impl ModalityAdapter for MouseAdapter {
    fn modality(&self) -> Modality {
        Modality::Mouse
    }

    fn attach(&mut self, listeners: &mut Listeners) {
        listeners.attach(EventKind::MouseDown, ListenerScope::Element);
    }

    fn handle(&mut self, event: &NativeEvent, cx: &mut AdapterContext<'_>) -> bool {
        let NativePayload::Mouse(input) = event.payload() else {
            return false;
        };
        let sample = Self::sample(input);

        match event.kind() {
            EventKind::MouseDown => {
                if input.button != PRIMARY_BUTTON || cx.guard.suppresses_mouse(cx.now) {
                    return false;
                }
                if !cx.machine.press(Modality::Mouse, sample, event) {
                    return false;
                }
                for kind in TRACKING {
                    cx.listeners.attach(kind, ListenerScope::Document);
                }
                true
            }
            EventKind::MouseMove => cx.machine.drag(Modality::Mouse, sample, event),
            EventKind::MouseUp => {
                let released = cx.machine.release(Modality::Mouse, sample, event);
                for kind in TRACKING {
                    cx.listeners.detach(kind, ListenerScope::Document);
                }
                released
            }
            _ => false,
        }
    }
}
