//! Error types for binding lifecycle operations.
//!
//! Native input is never an error: events that do not fit a gesture are
//! dropped silently by the adapters.

use thiserror::Error;

use crate::event::EventKind;

/// Result type for draggable operations.
pub type DraggableResult<T> = Result<T, DraggableError>;

/// Errors that can occur while configuring or binding a draggable.
#[derive(Debug, Error)]
pub enum DraggableError {
    /// The instance was destroyed and cannot be bound again.
    #[error("Draggable has been destroyed")]
    Destroyed,

    /// Options could not be parsed.
    #[error("Invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    /// A native event was built with a payload of the wrong family.
    #[error("Event kind {kind:?} does not match its payload")]
    KindMismatch {
        /// The declared kind.
        kind: EventKind,
    },
}
