//! Pointer events.

use super::{AdapterContext, ModalityAdapter};
use crate::event::{EventKind, Modality, NativeEvent, NativePayload, PointerInput, PRIMARY_BUTTON};
use crate::gesture::Sample;
use crate::surface::{ListenerScope, Listeners};

const TRACKING: [EventKind; 3] = [
    EventKind::PointerMove,
    EventKind::PointerUp,
    EventKind::PointerCancel,
];

/// Adapter for `pointerdown` / `pointermove` / `pointerup` /
/// `pointercancel`.
///
/// The pointer that pressed is captured to the element and is the only
/// one whose moves and ups are honored until the gesture ends.
#[derive(Debug, Default)]
pub struct PointerAdapter {
    active_pointer: Option<i32>,
}

impl PointerAdapter {
    /// Create a pointer adapter.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active_pointer: None,
        }
    }

    /// Id of the pointer driving the current gesture.
    #[must_use]
    pub const fn active_pointer(&self) -> Option<i32> {
        self.active_pointer
    }

    fn sample(input: &PointerInput) -> Sample {
        Sample {
            page: input.page,
            client: input.client,
            modifiers: input.modifiers,
        }
    }

    fn owns(&self, input: &PointerInput) -> bool {
        self.active_pointer == Some(input.pointer_id)
    }

    fn finish(&mut self, cx: &mut AdapterContext<'_>) {
        self.active_pointer = None;
        cx.listeners.release_pointer_capture();
        for kind in TRACKING {
            cx.listeners.detach(kind, ListenerScope::Document);
        }
    }
}

impl ModalityAdapter for PointerAdapter {
    fn modality(&self) -> Modality {
        Modality::Pointer
    }

    fn attach(&mut self, listeners: &mut Listeners) {
        listeners.attach(EventKind::PointerDown, ListenerScope::Element);
    }

    fn handle(&mut self, event: &NativeEvent, cx: &mut AdapterContext<'_>) -> bool {
        let NativePayload::Pointer(input) = event.payload() else {
            return false;
        };
        let sample = Self::sample(input);

        match event.kind() {
            EventKind::PointerDown => {
                if !input.is_primary
                    || input.button != PRIMARY_BUTTON
                    || self.active_pointer.is_some()
                {
                    return false;
                }
                if !cx.machine.press(Modality::Pointer, sample, event) {
                    return false;
                }
                self.active_pointer = Some(input.pointer_id);
                cx.listeners.capture_pointer(input.pointer_id);
                for kind in TRACKING {
                    cx.listeners.attach(kind, ListenerScope::Document);
                }
                true
            }
            EventKind::PointerMove => {
                self.owns(input) && cx.machine.drag(Modality::Pointer, sample, event)
            }
            EventKind::PointerUp => {
                if !self.owns(input) || !input.is_primary {
                    return false;
                }
                let released = cx.machine.release(Modality::Pointer, sample, event);
                self.finish(cx);
                released
            }
            EventKind::PointerCancel => {
                if !self.owns(input) || !input.is_primary {
                    return false;
                }
                let cancelled = cx.machine.cancel(Modality::Pointer, sample, event);
                self.finish(cx);
                cancelled
            }
            _ => false,
        }
    }
}
