//! DOM event decoding into the core's native event model.

use draggable_core::{
    EventKind, Modality, Modifiers, MouseInput, NativeEvent, Point, PointerInput, PointerType,
    TouchContact, TouchInput,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, MouseEvent, PointerEvent, Touch, TouchEvent, TouchList};

/// Decode a DOM event. Returns `None` for event types or shapes the
/// adapters do not consume.
#[must_use]
pub fn native_event(event: &Event) -> Option<NativeEvent> {
    let kind = EventKind::from_name(&event.type_())?;
    let decoded = match kind.modality() {
        None => Ok(NativeEvent::context_menu()),
        Some(Modality::Pointer) => {
            NativeEvent::pointer(kind, pointer_input(event.dyn_ref::<PointerEvent>()?))
        }
        Some(Modality::Mouse) => {
            NativeEvent::mouse(kind, mouse_input(event.dyn_ref::<MouseEvent>()?))
        }
        Some(Modality::Touch) => {
            NativeEvent::touch(kind, touch_input(event.dyn_ref::<TouchEvent>()?))
        }
    };
    decoded.ok()
}

/// Read a coordinate pair as the `double` the browser reports. The typed
/// web-sys getters return `i32` and drop sub-pixel precision.
fn point(source: &JsValue, x: &str, y: &str) -> Point {
    let read = |name: &str| {
        js_sys::Reflect::get(source, &JsValue::from_str(name))
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or_default()
    };
    Point::new(read(x), read(y))
}

fn page(source: &JsValue) -> Point {
    point(source, "pageX", "pageY")
}

fn client(source: &JsValue) -> Point {
    point(source, "clientX", "clientY")
}

fn mouse_modifiers(event: &MouseEvent) -> Modifiers {
    Modifiers {
        shift: event.shift_key(),
        ctrl: event.ctrl_key(),
        alt: event.alt_key(),
        meta: event.meta_key(),
    }
}

fn mouse_input(event: &MouseEvent) -> MouseInput {
    MouseInput {
        page: page(event),
        client: client(event),
        button: event.button(),
        modifiers: mouse_modifiers(event),
    }
}

fn pointer_input(event: &PointerEvent) -> PointerInput {
    let mouse: &MouseEvent = event;
    PointerInput {
        pointer_id: event.pointer_id(),
        pointer_type: PointerType::from_name(&event.pointer_type()),
        is_primary: event.is_primary(),
        button: mouse.button(),
        page: page(event),
        client: client(event),
        modifiers: mouse_modifiers(mouse),
    }
}

fn contact(touch: &Touch) -> TouchContact {
    TouchContact {
        identifier: touch.identifier(),
        page: page(touch),
        client: client(touch),
    }
}

fn contacts(list: &TouchList) -> Vec<TouchContact> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .map(|touch| contact(&touch))
        .collect()
}

fn touch_input(event: &TouchEvent) -> TouchInput {
    TouchInput {
        touches: contacts(&event.touches()),
        changed_touches: contacts(&event.changed_touches()),
        modifiers: Modifiers {
            shift: event.shift_key(),
            ctrl: event.ctrl_key(),
            alt: event.alt_key(),
            meta: event.meta_key(),
        },
    }
}
