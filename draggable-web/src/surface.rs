//! A [`Surface`] that registers real DOM listeners.

use std::collections::HashMap;
use std::rc::Weak;

use draggable_core::{EventKind, ListenerScope, Surface};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget};

use crate::error::{DomError, DomResult};
use crate::host::Shared;

type Listener = Closure<dyn FnMut(Event)>;

/// DOM element plus its owner document.
///
/// One closure is created per `(scope, kind)` and kept for the lifetime
/// of the surface, so detaching from inside a running listener never
/// frees that listener.
pub struct DomSurface {
    element: Element,
    document: Document,
    host: Weak<Shared>,
    listeners: HashMap<(ListenerScope, EventKind), Listener>,
}

impl DomSurface {
    pub(crate) fn new(element: Element, host: Weak<Shared>) -> DomResult<Self> {
        let document = element.owner_document().ok_or(DomError::NoDocument)?;
        Ok(Self {
            element,
            document,
            host,
            listeners: HashMap::new(),
        })
    }

    fn target(&self, scope: ListenerScope) -> EventTarget {
        match scope {
            ListenerScope::Element => self.element.clone().into(),
            ListenerScope::Document => self.document.clone().into(),
        }
    }
}

fn listener(host: Weak<Shared>, scope: ListenerScope) -> Listener {
    Closure::wrap(Box::new(move |event: Event| {
        if let Some(host) = host.upgrade() {
            host.deliver(scope, &event);
        }
    }) as Box<dyn FnMut(Event)>)
}

impl Surface for DomSurface {
    fn attach(&mut self, kind: EventKind, scope: ListenerScope) {
        let target = self.target(scope);
        let host = self.host.clone();
        let callback = self
            .listeners
            .entry((scope, kind))
            .or_insert_with(|| listener(host, scope));
        let function = callback.as_ref().unchecked_ref();
        if let Err(err) = target.add_event_listener_with_callback(kind.as_str(), function) {
            tracing::warn!(%kind, ?scope, ?err, "failed to add listener");
        }
    }

    fn detach(&mut self, kind: EventKind, scope: ListenerScope) {
        let Some(callback) = self.listeners.get(&(scope, kind)) else {
            return;
        };
        if let Err(err) = self
            .target(scope)
            .remove_event_listener_with_callback(kind.as_str(), callback.as_ref().unchecked_ref())
        {
            tracing::warn!(%kind, ?scope, ?err, "failed to remove listener");
        }
    }

    fn capture_pointer(&mut self, pointer_id: i32) {
        // Fails for synthetic events whose pointer is not active; drag
        // still tracks through the document listeners.
        if let Err(err) = self.element.set_pointer_capture(pointer_id) {
            tracing::debug!(pointer_id, ?err, "pointer capture unavailable");
        }
    }

    fn release_pointer_capture(&mut self, pointer_id: i32) {
        if self.element.has_pointer_capture(pointer_id) {
            let _ = self.element.release_pointer_capture(pointer_id);
        }
    }
}

impl Drop for DomSurface {
    fn drop(&mut self) {
        for ((scope, kind), callback) in &self.listeners {
            let function = callback.as_ref().unchecked_ref();
            let _ = self
                .target(*scope)
                .remove_event_listener_with_callback(kind.as_str(), function);
        }
    }
}
