//! Browser-like event routing over a `VirtualSurface`.
//!
//! Events fired at the bound element reach element listeners first and
//! then bubble to the document. Events fired elsewhere only reach the
//! document, unless the pointer is captured to the element.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use draggable_core::{
    CanonicalEvent, Dispatch, Draggable, DraggableConfig, Environment, EventKind, ListenerScope,
    ManualClock, Modifiers, MouseInput, NativeEvent, NativePayload, Point, PointerInput,
    TouchContact, TouchInput, VirtualSurface,
};

/// Install a test subscriber once; honors `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Where an event is fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The bound element.
    Element,
    /// Another element on the same page.
    Elsewhere,
}

/// What a callback saw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub page: (f64, f64),
    pub client: (f64, f64),
    pub offset: Option<(f64, f64)>,
    pub is_touch: bool,
    pub modifiers: (bool, bool, bool),
    pub kind: EventKind,
}

impl Record {
    fn from_event(event: &CanonicalEvent<'_>) -> Self {
        Self {
            page: (event.page_x, event.page_y),
            client: (event.client_x, event.client_y),
            offset: event.offset_x.zip(event.offset_y),
            is_touch: event.is_touch,
            modifiers: (event.shift_key, event.ctrl_key, event.alt_key),
            kind: event.original_event.kind(),
        }
    }
}

/// Every callback invocation, in order.
#[derive(Debug, Default)]
pub struct Calls {
    pub press: Vec<Record>,
    pub drag: Vec<Record>,
    pub release: Vec<Record>,
}

impl Calls {
    pub fn total(&self) -> usize {
        self.press.len() + self.drag.len() + self.release.len()
    }
}

pub type SharedCalls = Rc<RefCell<Calls>>;

/// A config recording every phase into `calls`.
pub fn recording_config(calls: &SharedCalls) -> DraggableConfig {
    let (press, drag, release) = (calls.clone(), calls.clone(), calls.clone());
    DraggableConfig::new()
        .on_press(move |e| press.borrow_mut().press.push(Record::from_event(e)))
        .on_drag(move |e| drag.borrow_mut().drag.push(Record::from_event(e)))
        .on_release(move |e| release.borrow_mut().release.push(Record::from_event(e)))
}

/// A page with one bound draggable.
pub struct Page {
    pub draggable: Draggable,
    pub surface: VirtualSurface,
    pub clock: ManualClock,
    pub calls: SharedCalls,
    /// Added to client coordinates to obtain page coordinates.
    pub scroll: Point,
}

impl Page {
    /// Bind a recording draggable. `pointer_events` is the capability
    /// probe answer.
    pub fn new(pointer_events: bool) -> Self {
        Self::with_config(pointer_events, |config| config)
    }

    /// Like [`Self::new`] but lets the caller adjust the config.
    pub fn with_config(
        pointer_events: bool,
        adjust: impl FnOnce(DraggableConfig) -> DraggableConfig,
    ) -> Self {
        init_tracing();
        let calls = SharedCalls::default();
        let clock = ManualClock::new();
        let environment =
            Environment::new(clock.clone()).with_pointer_probe(move || pointer_events);
        let mut draggable =
            Draggable::with_environment(adjust(recording_config(&calls)), environment);
        let surface = VirtualSurface::new();
        draggable.bind_to(surface.clone()).expect("fresh draggable binds");
        Self {
            draggable,
            surface,
            clock,
            calls,
            scroll: Point::default(),
        }
    }

    /// Deliver `event` the way a browser would.
    pub fn fire(&mut self, target: Target, event: &NativeEvent) -> Dispatch {
        let kind = event.kind();
        let captured = match event.payload() {
            NativePayload::Pointer(input) => {
                self.surface.captured_pointer() == Some(input.pointer_id)
            }
            _ => false,
        };
        let mut outcome = Dispatch::default();
        if (target == Target::Element || captured)
            && self.surface.is_listening(kind, ListenerScope::Element)
        {
            merge(&mut outcome, self.draggable.dispatch(ListenerScope::Element, event));
        }
        if self.surface.is_listening(kind, ListenerScope::Document) {
            merge(&mut outcome, self.draggable.dispatch(ListenerScope::Document, event));
        }
        outcome
    }

    fn point(&self, x: f64, y: f64) -> (Point, Point) {
        (
            Point::new(x + self.scroll.x, y + self.scroll.y),
            Point::new(x, y),
        )
    }

    // ------------------------------------------------------------------
    // Mouse
    // ------------------------------------------------------------------

    pub fn mouse(
        &mut self,
        kind: EventKind,
        target: Target,
        x: f64,
        y: f64,
        button: i16,
    ) -> Dispatch {
        let (page, client) = self.point(x, y);
        let input = MouseInput {
            page,
            client,
            button,
            modifiers: Modifiers::default(),
        };
        let event = NativeEvent::mouse(kind, input).expect("mouse kind");
        self.fire(target, &event)
    }

    pub fn mouse_down(&mut self, x: f64, y: f64) -> Dispatch {
        self.mouse(EventKind::MouseDown, Target::Element, x, y, 0)
    }

    pub fn mouse_move(&mut self, x: f64, y: f64) -> Dispatch {
        self.mouse(EventKind::MouseMove, Target::Element, x, y, 0)
    }

    pub fn mouse_up(&mut self, x: f64, y: f64) -> Dispatch {
        self.mouse(EventKind::MouseUp, Target::Element, x, y, 0)
    }

    // ------------------------------------------------------------------
    // Touch
    // ------------------------------------------------------------------

    fn contact(&self, identifier: i32, x: f64, y: f64) -> TouchContact {
        let (page, client) = self.point(x, y);
        TouchContact {
            identifier,
            page,
            client,
        }
    }

    pub fn touch(
        &mut self,
        kind: EventKind,
        touches: Vec<TouchContact>,
        changed_touches: Vec<TouchContact>,
    ) -> Dispatch {
        let input = TouchInput {
            touches,
            changed_touches,
            modifiers: Modifiers::default(),
        };
        let event = NativeEvent::touch(kind, input).expect("touch kind");
        self.fire(Target::Element, &event)
    }

    pub fn touch_start(&mut self, x: f64, y: f64) -> Dispatch {
        let c = self.contact(0, x, y);
        self.touch(EventKind::TouchStart, vec![c], vec![c])
    }

    pub fn touch_move(&mut self, x: f64, y: f64) -> Dispatch {
        let c = self.contact(0, x, y);
        self.touch(EventKind::TouchMove, vec![c], vec![c])
    }

    pub fn touch_end(&mut self, x: f64, y: f64) -> Dispatch {
        let c = self.contact(0, x, y);
        self.touch(EventKind::TouchEnd, vec![], vec![c])
    }

    pub fn touch_cancel(&mut self, x: f64, y: f64) -> Dispatch {
        let c = self.contact(0, x, y);
        self.touch(EventKind::TouchCancel, vec![], vec![c])
    }

    /// A second finger lands while the first one is down.
    pub fn gesture_start(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Dispatch {
        let (a, b) = (self.contact(0, x1, y1), self.contact(1, x2, y2));
        self.touch(EventKind::TouchStart, vec![a, b], vec![b])
    }

    /// Two fingers move together.
    pub fn gesture_move(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Dispatch {
        let (a, b) = (self.contact(0, x1, y1), self.contact(1, x2, y2));
        self.touch(EventKind::TouchMove, vec![a, b], vec![a, b])
    }

    // ------------------------------------------------------------------
    // Pointer
    // ------------------------------------------------------------------

    pub fn pointer(
        &mut self,
        kind: EventKind,
        target: Target,
        x: f64,
        y: f64,
        is_primary: bool,
        button: i16,
    ) -> Dispatch {
        let (page, client) = self.point(x, y);
        let input = PointerInput {
            pointer_id: if is_primary { 1 } else { 2 },
            is_primary,
            button,
            page,
            client,
            ..PointerInput::default()
        };
        let event = NativeEvent::pointer(kind, input).expect("pointer kind");
        self.fire(target, &event)
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) -> Dispatch {
        self.pointer(EventKind::PointerDown, Target::Element, x, y, true, 0)
    }

    pub fn pointer_move(&mut self, target: Target, x: f64, y: f64) -> Dispatch {
        self.pointer(EventKind::PointerMove, target, x, y, true, 0)
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) -> Dispatch {
        self.pointer(EventKind::PointerUp, Target::Element, x, y, true, 0)
    }

    pub fn pointer_cancel(&mut self, x: f64, y: f64) -> Dispatch {
        self.pointer(EventKind::PointerCancel, Target::Element, x, y, true, 0)
    }

    // ------------------------------------------------------------------
    // Other
    // ------------------------------------------------------------------

    pub fn context_menu(&mut self) -> Dispatch {
        self.fire(Target::Element, &NativeEvent::context_menu())
    }

    pub fn calls(&self) -> std::cell::Ref<'_, Calls> {
        self.calls.borrow()
    }
}

fn merge(into: &mut Dispatch, from: Dispatch) {
    into.accepted |= from.accepted;
    into.prevent_default |= from.prevent_default;
}
