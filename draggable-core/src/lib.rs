//! # Draggable Core
//!
//! Unified press/drag/release gestures over mouse, touch and pointer input.
//! Platform independent; the browser host lives in `draggable-web`.
//!
//! ## Architecture
//!
//! ```text
//! native event ──► Draggable::dispatch
//!                      │
//!        ┌─────────────┼──────────────┐
//!        ▼             ▼              ▼
//!   MouseAdapter  TouchAdapter  PointerAdapter   (filters, EmulationGuard)
//!        └─────────────┼──────────────┘
//!                      ▼
//!              GestureStateMachine ──► press / drag / release callbacks
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod adapter;
pub mod clock;
pub mod config;
pub mod draggable;
pub mod error;
pub mod event;
pub mod gesture;
pub mod guard;
pub mod surface;

#[cfg(not(target_arch = "wasm32"))]
pub use clock::SystemClock;
pub use clock::{Clock, ManualClock};
pub use config::{DraggableConfig, DraggableOptions, Environment, GestureHandler};
pub use draggable::{BindingId, Dispatch, Draggable};
pub use error::{DraggableError, DraggableResult};
pub use event::{
    CanonicalEvent, EventKind, Modality, Modifiers, MouseInput, NativeEvent, NativePayload, Point,
    PointerInput, PointerType, TouchContact, TouchInput, PRIMARY_BUTTON,
};
pub use gesture::{GestureState, GestureStateMachine, Sample};
pub use guard::EmulationGuard;
pub use surface::{ListenerScope, Listeners, Surface, VirtualSurface};

/// Draggable core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
