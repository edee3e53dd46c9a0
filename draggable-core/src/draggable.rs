//! Binding a draggable to a surface and routing native events.

use uuid::Uuid;

use crate::adapter::{self, AdapterContext, ModalityAdapter};
use crate::config::{DraggableConfig, DraggableOptions, Environment};
use crate::error::{DraggableError, DraggableResult};
use crate::event::{EventKind, Modality, NativeEvent};
use crate::gesture::{GestureState, GestureStateMachine};
use crate::guard::EmulationGuard;
use crate::surface::{ListenerScope, Listeners, Surface};

/// Unique identifier for one binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingId(Uuid);

impl BindingId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for BindingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the host should do with a dispatched native event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dispatch {
    /// The event produced a transition (or was a blocked context menu).
    pub accepted: bool,
    /// The host should call `preventDefault` on the native event.
    pub prevent_default: bool,
}

struct Binding {
    id: BindingId,
    listeners: Listeners,
    adapters: Vec<Box<dyn ModalityAdapter>>,
}

impl Binding {
    fn modalities(&self) -> Vec<Modality> {
        self.adapters.iter().map(|a| a.modality()).collect()
    }
}

/// Recognizes press/drag/release on one bound surface.
///
/// ```
/// use draggable_core::{Draggable, DraggableConfig, VirtualSurface};
///
/// let mut draggable = Draggable::new(DraggableConfig::new().on_press(|e| {
///     println!("pressed at {}, {}", e.page_x, e.page_y);
/// }));
/// draggable.bind_to(VirtualSurface::new()).expect("not destroyed");
/// assert!(draggable.is_bound());
/// draggable.destroy();
/// ```
pub struct Draggable {
    options: DraggableOptions,
    environment: Environment,
    machine: GestureStateMachine,
    guard: EmulationGuard,
    binding: Option<Binding>,
    destroyed: bool,
}

impl Draggable {
    /// Create an unbound draggable using the default environment.
    ///
    /// Not available on `wasm32`; use [`Self::with_environment`] with a
    /// host clock there.
    #[cfg(not(target_arch = "wasm32"))]
    #[must_use]
    pub fn new(config: DraggableConfig) -> Self {
        Self::with_environment(config, Environment::default())
    }

    /// Create an unbound draggable with an explicit environment.
    #[must_use]
    pub fn with_environment(config: DraggableConfig, environment: Environment) -> Self {
        let (handlers, options) = config.into_parts();
        Self {
            guard: EmulationGuard::new(options.suppression_window()),
            options,
            environment,
            machine: GestureStateMachine::new(handlers),
            binding: None,
            destroyed: false,
        }
    }

    /// Attach to `surface`.
    ///
    /// The pointer capability probe is consulted once here. Binding an
    /// already bound instance detaches from the previous surface first and
    /// drops any gesture in progress without callbacks.
    ///
    /// # Errors
    ///
    /// Returns [`DraggableError::Destroyed`] after [`Self::destroy`].
    pub fn bind_to(&mut self, surface: impl Surface + 'static) -> DraggableResult<BindingId> {
        if self.destroyed {
            return Err(DraggableError::Destroyed);
        }
        if let Some(mut previous) = self.binding.take() {
            tracing::debug!(binding = %previous.id, "unbinding for rebind");
            previous.listeners.detach_all();
            self.machine.reset();
            self.guard.reset();
        }

        let binding = self.attach(Listeners::new(Box::new(surface)));
        let id = binding.id;
        tracing::debug!(binding = %id, adapters = ?binding.modalities(), "bound");
        self.binding = Some(binding);
        Ok(id)
    }

    /// Replace callbacks and options.
    ///
    /// Switching `mouse_only` on a bound instance re-selects the adapters
    /// on the same surface and drops any gesture in progress.
    ///
    /// # Errors
    ///
    /// Returns [`DraggableError::Destroyed`] after [`Self::destroy`].
    pub fn update(&mut self, config: DraggableConfig) -> DraggableResult<()> {
        if self.destroyed {
            return Err(DraggableError::Destroyed);
        }
        let (handlers, options) = config.into_parts();
        let reselect = options.mouse_only != self.options.mouse_only;
        self.machine.set_handlers(handlers);
        self.guard.set_window(options.suppression_window());
        self.options = options;

        if reselect {
            if let Some(mut previous) = self.binding.take() {
                previous.listeners.detach_all();
                self.machine.reset();
                let binding = self.attach(previous.listeners);
                tracing::debug!(
                    binding = %binding.id,
                    adapters = ?binding.modalities(),
                    "adapters reselected"
                );
                self.binding = Some(binding);
            }
        }
        Ok(())
    }

    /// Route one native event received by a listener at `scope`.
    ///
    /// Events for listeners that are no longer attached, or that arrive
    /// after [`Self::destroy`], are ignored.
    pub fn dispatch(&mut self, scope: ListenerScope, event: &NativeEvent) -> Dispatch {
        if self.destroyed {
            return Dispatch::default();
        }
        let Some(binding) = self.binding.as_mut() else {
            return Dispatch::default();
        };
        if !binding.listeners.is_attached(event.kind(), scope) {
            return Dispatch::default();
        }

        let Some(modality) = event.kind().modality() else {
            // contextmenu would interrupt the drag in progress
            let active = self.machine.state().is_active();
            return Dispatch {
                accepted: active,
                prevent_default: active,
            };
        };
        let Some(adapter) = binding
            .adapters
            .iter_mut()
            .find(|adapter| adapter.modality() == modality)
        else {
            return Dispatch::default();
        };

        let mut cx = AdapterContext {
            machine: &mut self.machine,
            listeners: &mut binding.listeners,
            guard: &mut self.guard,
            now: self.environment.now(),
        };
        Dispatch {
            accepted: adapter.handle(event, &mut cx),
            prevent_default: false,
        }
    }

    /// Detach every listener and stop producing callbacks, even mid-drag.
    ///
    /// Idempotent. A destroyed instance cannot be bound again.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        if let Some(mut binding) = self.binding.take() {
            binding.listeners.detach_all();
            tracing::debug!(binding = %binding.id, "destroyed");
        }
        self.machine.tear_down();
    }

    /// Whether a surface is bound.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    /// Whether [`Self::destroy`] has been called.
    #[must_use]
    pub const fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Id of the current binding.
    #[must_use]
    pub fn binding_id(&self) -> Option<BindingId> {
        self.binding.as_ref().map(|binding| binding.id)
    }

    /// Modalities the current binding listens to.
    #[must_use]
    pub fn modalities(&self) -> Vec<Modality> {
        self.binding
            .as_ref()
            .map(Binding::modalities)
            .unwrap_or_default()
    }

    /// Whether `kind` is currently attached at `scope`.
    #[must_use]
    pub fn is_listening(&self, kind: EventKind, scope: ListenerScope) -> bool {
        self.binding
            .as_ref()
            .is_some_and(|binding| binding.listeners.is_attached(kind, scope))
    }

    /// The current gesture state.
    #[must_use]
    pub const fn state(&self) -> &GestureState {
        self.machine.state()
    }

    /// The current options.
    #[must_use]
    pub const fn options(&self) -> &DraggableOptions {
        &self.options
    }

    fn attach(&self, mut listeners: Listeners) -> Binding {
        let pointer_events = self.environment.supports_pointer_events();
        let mut adapters = adapter::select(self.options.mouse_only, pointer_events);
        for adapter in &mut adapters {
            adapter.attach(&mut listeners);
        }
        listeners.attach(EventKind::ContextMenu, ListenerScope::Element);
        Binding {
            id: BindingId::new(),
            listeners,
            adapters,
        }
    }
}

impl Drop for Draggable {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl std::fmt::Debug for Draggable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Draggable")
            .field("options", &self.options)
            .field("state", self.machine.state())
            .field("binding", &self.binding_id())
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}
