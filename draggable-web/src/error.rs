//! Error types for the browser host.

use draggable_core::DraggableError;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Result type for browser host operations.
pub type DomResult<T> = Result<T, DomError>;

/// Errors that can occur while binding to the DOM.
#[derive(Debug, Error)]
pub enum DomError {
    /// No global `window` (not running in a browser main thread).
    #[error("No window object")]
    NoWindow,

    /// The element is not attached to a document.
    #[error("Element has no owner document")]
    NoDocument,

    /// No element with the requested id.
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Called from inside a gesture callback of the same draggable.
    #[error("Draggable is busy dispatching an event")]
    Busy,

    /// Core lifecycle error.
    #[error(transparent)]
    Draggable(#[from] DraggableError),
}

impl From<DomError> for JsValue {
    fn from(err: DomError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
