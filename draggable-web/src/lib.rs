//! # Draggable for the Web
//!
//! Binds `draggable-core` to DOM elements: real listeners on the element
//! and its document, decoding of `MouseEvent` / `TouchEvent` /
//! `PointerEvent`, a `performance.now()` clock and the `PointerEvent`
//! capability probe.
//!
//! ## Usage
//!
//! Build for WASM:
//! ```bash
//! wasm-pack build --target web draggable-web
//! ```
//!
//! From Rust:
//! ```no_run
//! use draggable_core::DraggableConfig;
//! use draggable_web::DomDraggable;
//!
//! let draggable = DomDraggable::new(
//!     DraggableConfig::new().on_drag(|e| tracing::debug!(x = e.page_x, y = e.page_y, "drag")),
//! );
//! draggable.bind_to_id("handle").expect("element exists");
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod bindings;
pub mod decode;
pub mod environment;
pub mod error;
mod host;
pub mod surface;

pub use bindings::{support_pointer_event, WasmDraggable};
pub use environment::{browser_environment, supports_pointer_events, PerformanceClock};
pub use error::{DomError, DomResult};
pub use host::{original_event, DomDraggable};
pub use surface::DomSurface;
