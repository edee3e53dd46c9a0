//! Native input events and the canonical event handed to callbacks.
//!
//! Hosts decode their platform events (DOM `MouseEvent`, `TouchEvent`,
//! `PointerEvent`) into [`NativeEvent`]. Adapters turn accepted native
//! events into a [`CanonicalEvent`] through the gesture state machine.

use serde::{Deserialize, Serialize};

use crate::error::{DraggableError, DraggableResult};

/// Button code of the primary (left) mouse button.
pub const PRIMARY_BUTTON: i16 = 0;

/// A position in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Keyboard modifiers held while the event was emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Modifiers {
    /// Shift key pressed.
    pub shift: bool,
    /// Control key pressed.
    pub ctrl: bool,
    /// Alt/Option key pressed.
    pub alt: bool,
    /// Meta/Command key pressed.
    pub meta: bool,
}

/// The input event family an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    /// `mousedown` / `mousemove` / `mouseup`.
    Mouse,
    /// `touchstart` / `touchmove` / `touchend` / `touchcancel`.
    Touch,
    /// `pointerdown` / `pointermove` / `pointerup` / `pointercancel`.
    Pointer,
}

/// Every native event type the adapters listen to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum EventKind {
    MouseDown,
    MouseMove,
    MouseUp,
    TouchStart,
    TouchMove,
    TouchEnd,
    TouchCancel,
    PointerDown,
    PointerMove,
    PointerUp,
    PointerCancel,
    ContextMenu,
}

impl EventKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::MouseDown,
        Self::MouseMove,
        Self::MouseUp,
        Self::TouchStart,
        Self::TouchMove,
        Self::TouchEnd,
        Self::TouchCancel,
        Self::PointerDown,
        Self::PointerMove,
        Self::PointerUp,
        Self::PointerCancel,
        Self::ContextMenu,
    ];

    /// The DOM event type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MouseDown => "mousedown",
            Self::MouseMove => "mousemove",
            Self::MouseUp => "mouseup",
            Self::TouchStart => "touchstart",
            Self::TouchMove => "touchmove",
            Self::TouchEnd => "touchend",
            Self::TouchCancel => "touchcancel",
            Self::PointerDown => "pointerdown",
            Self::PointerMove => "pointermove",
            Self::PointerUp => "pointerup",
            Self::PointerCancel => "pointercancel",
            Self::ContextMenu => "contextmenu",
        }
    }

    /// Look up a kind by its DOM event type name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// The modality that owns this kind. `contextmenu` belongs to none.
    #[must_use]
    pub const fn modality(self) -> Option<Modality> {
        match self {
            Self::MouseDown | Self::MouseMove | Self::MouseUp => Some(Modality::Mouse),
            Self::TouchStart | Self::TouchMove | Self::TouchEnd | Self::TouchCancel => {
                Some(Modality::Touch)
            }
            Self::PointerDown | Self::PointerMove | Self::PointerUp | Self::PointerCancel => {
                Some(Modality::Pointer)
            }
            Self::ContextMenu => None,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of a mouse event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MouseInput {
    /// Document coordinates.
    pub page: Point,
    /// Viewport coordinates.
    pub client: Point,
    /// Button code (0 = left, 1 = middle, 2 = right).
    pub button: i16,
    /// Active modifier keys.
    pub modifiers: Modifiers,
}

/// A single touch contact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TouchContact {
    /// Contact identifier, stable for the lifetime of the contact.
    pub identifier: i32,
    /// Document coordinates.
    pub page: Point,
    /// Viewport coordinates.
    pub client: Point,
}

/// Payload of a touch event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TouchInput {
    /// Contacts currently on the surface.
    pub touches: Vec<TouchContact>,
    /// Contacts that changed in this event.
    pub changed_touches: Vec<TouchContact>,
    /// Active modifier keys.
    pub modifiers: Modifiers,
}

impl TouchInput {
    /// Find a changed contact by identifier.
    #[must_use]
    pub fn changed(&self, identifier: i32) -> Option<&TouchContact> {
        self.changed_touches
            .iter()
            .find(|contact| contact.identifier == identifier)
    }

    /// Check if more than one contact is on the surface.
    #[must_use]
    pub fn is_multi_touch(&self) -> bool {
        self.touches.len() > 1
    }
}

/// Device that produced a pointer event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerType {
    /// A mouse.
    #[default]
    Mouse,
    /// A stylus.
    Pen,
    /// A finger.
    Touch,
    /// Anything the host could not classify.
    Unknown,
}

impl PointerType {
    /// Parse the DOM `pointerType` string.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "mouse" => Self::Mouse,
            "pen" => Self::Pen,
            "touch" => Self::Touch,
            _ => Self::Unknown,
        }
    }
}

/// Payload of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerInput {
    /// Pointer identifier.
    pub pointer_id: i32,
    /// Device type.
    pub pointer_type: PointerType,
    /// Whether this is the primary pointer of its type.
    pub is_primary: bool,
    /// Button code (0 = left/contact, 2 = right).
    pub button: i16,
    /// Document coordinates.
    pub page: Point,
    /// Viewport coordinates.
    pub client: Point,
    /// Active modifier keys.
    pub modifiers: Modifiers,
}

impl Default for PointerInput {
    fn default() -> Self {
        Self {
            pointer_id: 1,
            pointer_type: PointerType::Mouse,
            is_primary: true,
            button: PRIMARY_BUTTON,
            page: Point::default(),
            client: Point::default(),
            modifiers: Modifiers::default(),
        }
    }
}

/// Family-specific data of a native event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum NativePayload {
    /// Mouse event data.
    Mouse(MouseInput),
    /// Touch event data.
    Touch(TouchInput),
    /// Pointer event data.
    Pointer(PointerInput),
    /// `contextmenu` carries nothing the gesture needs.
    ContextMenu,
}

/// A decoded platform event.
///
/// The kind always agrees with the payload family; the constructors
/// reject mismatches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NativeEvent {
    kind: EventKind,
    payload: NativePayload,
}

impl NativeEvent {
    /// Create a native event.
    ///
    /// # Errors
    ///
    /// Returns [`DraggableError::KindMismatch`] if the payload does not
    /// belong to the family of `kind`.
    pub fn new(kind: EventKind, payload: NativePayload) -> DraggableResult<Self> {
        let matches = match (&payload, kind.modality()) {
            (NativePayload::Mouse(_), Some(Modality::Mouse))
            | (NativePayload::Touch(_), Some(Modality::Touch))
            | (NativePayload::Pointer(_), Some(Modality::Pointer))
            | (NativePayload::ContextMenu, None) => true,
            _ => false,
        };
        if matches {
            Ok(Self { kind, payload })
        } else {
            Err(DraggableError::KindMismatch { kind })
        }
    }

    /// Create a mouse event.
    ///
    /// # Errors
    ///
    /// Returns an error if `kind` is not a mouse kind.
    pub fn mouse(kind: EventKind, input: MouseInput) -> DraggableResult<Self> {
        Self::new(kind, NativePayload::Mouse(input))
    }

    /// Create a touch event.
    ///
    /// # Errors
    ///
    /// Returns an error if `kind` is not a touch kind.
    pub fn touch(kind: EventKind, input: TouchInput) -> DraggableResult<Self> {
        Self::new(kind, NativePayload::Touch(input))
    }

    /// Create a pointer event.
    ///
    /// # Errors
    ///
    /// Returns an error if `kind` is not a pointer kind.
    pub fn pointer(kind: EventKind, input: PointerInput) -> DraggableResult<Self> {
        Self::new(kind, NativePayload::Pointer(input))
    }

    /// Create a `contextmenu` event.
    #[must_use]
    pub const fn context_menu() -> Self {
        Self {
            kind: EventKind::ContextMenu,
            payload: NativePayload::ContextMenu,
        }
    }

    /// The event kind.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        self.kind
    }

    /// The family-specific payload.
    #[must_use]
    pub const fn payload(&self) -> &NativePayload {
        &self.payload
    }
}

/// The normalized event every callback receives.
///
/// Built fresh per native event and only lent to the callback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct CanonicalEvent<'a> {
    /// Document X of the primary contact.
    pub page_x: f64,
    /// Document Y of the primary contact.
    pub page_y: f64,
    /// Viewport X, verbatim from the native event.
    pub client_x: f64,
    /// Viewport Y, verbatim from the native event.
    pub client_y: f64,
    /// `page_x - press_origin.x`. `None` on press.
    pub offset_x: Option<f64>,
    /// `page_y - press_origin.y`. `None` on press.
    pub offset_y: Option<f64>,
    /// True only for touch-sourced events.
    pub is_touch: bool,
    /// Shift key state.
    pub shift_key: bool,
    /// Control key state.
    pub ctrl_key: bool,
    /// Alt key state.
    pub alt_key: bool,
    /// The native event this was derived from. Browser hosts also expose
    /// the live DOM event while the callback runs.
    pub original_event: &'a NativeEvent,
}
