//! The host-side element abstraction and the listener registry.
//!
//! A [`Surface`] owns the real native listeners (DOM `addEventListener`
//! in the browser). The core keeps its own record in [`Listeners`] and
//! mirrors every change to the surface, so teardown can always release
//! exactly what was registered.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::event::EventKind;

/// Where a listener is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListenerScope {
    /// The bound element.
    Element,
    /// The element's owner document; sees events bubbling from anywhere.
    Document,
}

/// An element that native listeners can be attached to.
pub trait Surface {
    /// Start delivering `kind` events received at `scope`.
    fn attach(&mut self, kind: EventKind, scope: ListenerScope);

    /// Stop delivering `kind` events received at `scope`.
    fn detach(&mut self, kind: EventKind, scope: ListenerScope);

    /// Route every event of `pointer_id` to the element until released.
    fn capture_pointer(&mut self, _pointer_id: i32) {}

    /// Undo [`Self::capture_pointer`].
    fn release_pointer_capture(&mut self, _pointer_id: i32) {}
}

/// Registry of the listeners one binding has attached.
pub struct Listeners {
    surface: Box<dyn Surface>,
    attached: BTreeSet<(ListenerScope, EventKind)>,
    captured: Option<i32>,
}

impl Listeners {
    /// Create an empty registry over a surface.
    #[must_use]
    pub fn new(surface: Box<dyn Surface>) -> Self {
        Self {
            surface,
            attached: BTreeSet::new(),
            captured: None,
        }
    }

    /// Attach a listener unless it is already attached.
    pub fn attach(&mut self, kind: EventKind, scope: ListenerScope) {
        if self.attached.insert((scope, kind)) {
            self.surface.attach(kind, scope);
        }
    }

    /// Detach a listener if it is attached.
    pub fn detach(&mut self, kind: EventKind, scope: ListenerScope) {
        if self.attached.remove(&(scope, kind)) {
            self.surface.detach(kind, scope);
        }
    }

    /// Whether `kind` is currently attached at `scope`.
    #[must_use]
    pub fn is_attached(&self, kind: EventKind, scope: ListenerScope) -> bool {
        self.attached.contains(&(scope, kind))
    }

    /// Number of attached listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attached.len()
    }

    /// Whether nothing is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }

    /// Capture a pointer, releasing any previous capture first.
    pub fn capture_pointer(&mut self, pointer_id: i32) {
        self.release_pointer_capture();
        self.captured = Some(pointer_id);
        self.surface.capture_pointer(pointer_id);
    }

    /// Release the captured pointer, if any.
    pub fn release_pointer_capture(&mut self) {
        if let Some(pointer_id) = self.captured.take() {
            self.surface.release_pointer_capture(pointer_id);
        }
    }

    /// Detach everything and release pointer capture.
    pub fn detach_all(&mut self) {
        self.release_pointer_capture();
        for (scope, kind) in std::mem::take(&mut self.attached) {
            self.surface.detach(kind, scope);
        }
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("attached", &self.attached)
            .field("captured", &self.captured)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
struct VirtualState {
    attached: BTreeSet<(ListenerScope, EventKind)>,
    captured: Option<i32>,
    attach_calls: usize,
    detach_calls: usize,
}

/// In-memory surface for native hosts and tests.
///
/// Clones share state: keep one handle to inspect what the draggable
/// registered after handing the other to [`crate::Draggable::bind_to`].
#[derive(Debug, Clone, Default)]
pub struct VirtualSurface {
    state: Rc<RefCell<VirtualState>>,
}

impl VirtualSurface {
    /// Create a surface with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `kind` is attached at `scope`.
    #[must_use]
    pub fn is_listening(&self, kind: EventKind, scope: ListenerScope) -> bool {
        self.state.borrow().attached.contains(&(scope, kind))
    }

    /// All attached listeners, ordered by scope then kind.
    #[must_use]
    pub fn listeners(&self) -> Vec<(ListenerScope, EventKind)> {
        self.state.borrow().attached.iter().copied().collect()
    }

    /// The pointer currently captured to the element.
    #[must_use]
    pub fn captured_pointer(&self) -> Option<i32> {
        self.state.borrow().captured
    }

    /// Total `attach` and `detach` calls received.
    #[must_use]
    pub fn call_counts(&self) -> (usize, usize) {
        let state = self.state.borrow();
        (state.attach_calls, state.detach_calls)
    }
}

impl Surface for VirtualSurface {
    fn attach(&mut self, kind: EventKind, scope: ListenerScope) {
        let mut state = self.state.borrow_mut();
        state.attach_calls += 1;
        state.attached.insert((scope, kind));
    }

    fn detach(&mut self, kind: EventKind, scope: ListenerScope) {
        let mut state = self.state.borrow_mut();
        state.detach_calls += 1;
        state.attached.remove(&(scope, kind));
    }

    fn capture_pointer(&mut self, pointer_id: i32) {
        self.state.borrow_mut().captured = Some(pointer_id);
    }

    fn release_pointer_capture(&mut self, pointer_id: i32) {
        let mut state = self.state.borrow_mut();
        if state.captured == Some(pointer_id) {
            state.captured = None;
        }
    }
}
