//! Owning a [`Draggable`] on behalf of DOM listeners.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use draggable_core::{BindingId, Draggable, DraggableConfig, Environment, ListenerScope};
use web_sys::{Element, Event};

use crate::decode;
use crate::environment::browser_environment;
use crate::error::{DomError, DomResult};
use crate::surface::DomSurface;

thread_local! {
    static DISPATCHING: RefCell<Option<Event>> = const { RefCell::new(None) };
}

/// The DOM event behind the gesture callback that is currently running.
///
/// Returns `None` outside callbacks. JavaScript callbacks receive the same
/// event as `originalEvent`.
#[must_use]
pub fn original_event() -> Option<Event> {
    DISPATCHING.with(|slot| slot.borrow().clone())
}

/// Publishes the event being dispatched until dropped.
struct Dispatching;

impl Dispatching {
    fn enter(event: &Event) -> Self {
        DISPATCHING.with(|slot| *slot.borrow_mut() = Some(event.clone()));
        Self
    }
}

impl Drop for Dispatching {
    fn drop(&mut self) {
        DISPATCHING.with(|slot| slot.borrow_mut().take());
    }
}

/// State shared between a [`DomDraggable`] and its listeners.
pub(crate) struct Shared {
    draggable: RefCell<Draggable>,
    pending_destroy: Cell<bool>,
    active: Cell<bool>,
}

impl Shared {
    /// Decode and dispatch one DOM event.
    pub(crate) fn deliver(&self, scope: ListenerScope, event: &Event) {
        let Some(native) = decode::native_event(event) else {
            return;
        };
        // Events raised synchronously from inside a callback are dropped.
        let Ok(mut draggable) = self.draggable.try_borrow_mut() else {
            return;
        };
        let outcome = {
            let _dispatching = Dispatching::enter(event);
            draggable.dispatch(scope, &native)
        };
        if self.pending_destroy.take() {
            draggable.destroy();
        }
        self.active.set(draggable.state().is_active());
        drop(draggable);

        if outcome.prevent_default {
            event.prevent_default();
        }
    }
}

/// A draggable bound to DOM elements.
///
/// Dropping it detaches every listener.
pub struct DomDraggable {
    shared: Rc<Shared>,
}

impl DomDraggable {
    /// Create an unbound draggable using the browser environment.
    #[must_use]
    pub fn new(config: DraggableConfig) -> Self {
        Self::with_environment(config, browser_environment())
    }

    /// Create an unbound draggable with an explicit environment.
    #[must_use]
    pub fn with_environment(config: DraggableConfig, environment: Environment) -> Self {
        Self {
            shared: Rc::new(Shared {
                draggable: RefCell::new(Draggable::with_environment(config, environment)),
                pending_destroy: Cell::new(false),
                active: Cell::new(false),
            }),
        }
    }

    /// Attach to `element`, detaching from any previous element.
    ///
    /// # Errors
    ///
    /// Returns an error if the element has no document, the draggable was
    /// destroyed, or this is called from inside one of its callbacks.
    pub fn bind_to(&self, element: &Element) -> DomResult<BindingId> {
        let surface = DomSurface::new(element.clone(), Rc::downgrade(&self.shared))?;
        let mut draggable = self
            .shared
            .draggable
            .try_borrow_mut()
            .map_err(|_| DomError::Busy)?;
        let id = draggable.bind_to(surface)?;
        self.shared.active.set(false);
        Ok(id)
    }

    /// Attach to the element with the given id in the current document.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no window or no such element, or for
    /// any reason [`Self::bind_to`] fails.
    pub fn bind_to_id(&self, element_id: &str) -> DomResult<BindingId> {
        let document = web_sys::window()
            .ok_or(DomError::NoWindow)?
            .document()
            .ok_or(DomError::NoDocument)?;
        let element = document
            .get_element_by_id(element_id)
            .ok_or_else(|| DomError::ElementNotFound(element_id.to_string()))?;
        self.bind_to(&element)
    }

    /// Replace callbacks and options.
    ///
    /// # Errors
    ///
    /// Returns an error if the draggable was destroyed or this is called
    /// from inside one of its callbacks.
    pub fn update(&self, config: DraggableConfig) -> DomResult<()> {
        let mut draggable = self
            .shared
            .draggable
            .try_borrow_mut()
            .map_err(|_| DomError::Busy)?;
        draggable.update(config)?;
        self.shared.active.set(draggable.state().is_active());
        Ok(())
    }

    /// Detach everything. Safe to call repeatedly, including from inside
    /// a callback, where teardown happens as soon as the callback returns.
    pub fn destroy(&self) {
        match self.shared.draggable.try_borrow_mut() {
            Ok(mut draggable) => draggable.destroy(),
            Err(_) => self.shared.pending_destroy.set(true),
        }
        self.shared.active.set(false);
    }

    /// Whether a gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.shared.active.get()
    }
}

impl std::fmt::Debug for DomDraggable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomDraggable")
            .field("active", &self.shared.active.get())
            .finish_non_exhaustive()
    }
}
