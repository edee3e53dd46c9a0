//! Touch events.
//!
//! Only single-finger gestures count. A second finger never starts,
//! moves or cancels anything; its events are dropped.

use super::{AdapterContext, ModalityAdapter};
use crate::event::{EventKind, Modality, NativeEvent, NativePayload, TouchContact, TouchInput};
use crate::gesture::Sample;
use crate::surface::{ListenerScope, Listeners};

/// Touch events stay with the element the contact started on, so these
/// are attached on the element for the duration of a gesture.
const TRACKING: [EventKind; 3] = [
    EventKind::TouchMove,
    EventKind::TouchEnd,
    EventKind::TouchCancel,
];

/// Adapter for `touchstart` / `touchmove` / `touchend` / `touchcancel`.
#[derive(Debug, Default)]
pub struct TouchAdapter {
    primary: Option<i32>,
}

impl TouchAdapter {
    /// Create a touch adapter.
    #[must_use]
    pub const fn new() -> Self {
        Self { primary: None }
    }

    /// Identifier of the contact driving the current gesture.
    #[must_use]
    pub const fn primary_contact(&self) -> Option<i32> {
        self.primary
    }

    fn sample(contact: &TouchContact, input: &TouchInput) -> Sample {
        Sample {
            page: contact.page,
            client: contact.client,
            modifiers: input.modifiers,
        }
    }

    fn start(
        &mut self,
        input: &TouchInput,
        event: &NativeEvent,
        cx: &mut AdapterContext<'_>,
    ) -> bool {
        let [contact] = input.touches.as_slice() else {
            return false;
        };
        if !cx.machine.press(Modality::Touch, Self::sample(contact, input), event) {
            return false;
        }
        self.primary = Some(contact.identifier);
        for kind in TRACKING {
            cx.listeners.attach(kind, ListenerScope::Element);
        }
        true
    }

    fn finish(&mut self, cx: &mut AdapterContext<'_>) {
        self.primary = None;
        for kind in TRACKING {
            cx.listeners.detach(kind, ListenerScope::Element);
        }
        cx.guard.touch_ended(cx.now);
    }
}

impl ModalityAdapter for TouchAdapter {
    fn modality(&self) -> Modality {
        Modality::Touch
    }

    fn attach(&mut self, listeners: &mut Listeners) {
        listeners.attach(EventKind::TouchStart, ListenerScope::Element);
    }

    fn handle(&mut self, event: &NativeEvent, cx: &mut AdapterContext<'_>) -> bool {
        let NativePayload::Touch(input) = event.payload() else {
            return false;
        };
        if event.kind() == EventKind::TouchStart {
            return self.start(input, event, cx);
        }
        let Some(primary) = self.primary else {
            return false;
        };

        match event.kind() {
            EventKind::TouchMove => {
                let [contact] = input.touches.as_slice() else {
                    return false;
                };
                contact.identifier == primary
                    && cx
                        .machine
                        .drag(Modality::Touch, Self::sample(contact, input), event)
            }
            EventKind::TouchEnd => {
                // Lifting one of several fingers does not end the gesture.
                if !input.touches.is_empty() {
                    return false;
                }
                let Some(contact) = input
                    .changed(primary)
                    .or_else(|| input.changed_touches.first())
                else {
                    return false;
                };
                let released = cx
                    .machine
                    .release(Modality::Touch, Self::sample(contact, input), event);
                self.finish(cx);
                released
            }
            EventKind::TouchCancel => {
                let contact = input
                    .changed(primary)
                    .or_else(|| input.changed_touches.first())
                    .or_else(|| input.touches.first())
                    .copied()
                    .unwrap_or_else(|| TouchContact {
                        identifier: primary,
                        page: cx.machine.state().press_origin().unwrap_or_default(),
                        client: cx.machine.state().press_origin().unwrap_or_default(),
                    });
                let cancelled = cx
                    .machine
                    .cancel(Modality::Touch, Self::sample(&contact, input), event);
                self.finish(cx);
                cancelled
            }
            _ => false,
        }
    }
}
