//! JavaScript bindings.
//!
//! ```javascript
//! import init, { WasmDraggable } from './pkg/draggable_web.js';
//!
//! await init();
//! const draggable = new WasmDraggable(
//!     (e) => console.log('press', e.pageX, e.pageY),
//!     (e) => console.log('drag', e.offsetX, e.offsetY),
//!     (e) => console.log('release'),
//!     JSON.stringify({ mouseOnly: false }),
//! );
//! draggable.bindTo(document.getElementById('handle'));
//! ```

use draggable_core::{CanonicalEvent, DraggableConfig, DraggableOptions};
use js_sys::Function;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::error::DomResult;
use crate::host::{original_event, DomDraggable};

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    tracing::info!("Draggable WASM initialized");
}

/// Whether the browser delivers pointer events.
#[wasm_bindgen(js_name = supportPointerEvent)]
#[must_use]
pub fn support_pointer_event() -> bool {
    crate::environment::supports_pointer_events()
}

/// Wrap a JS function as a gesture callback. The canonical event is passed
/// as a plain object with camelCase fields; `originalEvent` is the DOM
/// event itself.
fn js_handler(function: Function) -> impl FnMut(&CanonicalEvent<'_>) {
    move |event| {
        let value = match serde_json::to_string(event) {
            Ok(json) => js_sys::JSON::parse(&json),
            Err(err) => {
                tracing::warn!(%err, "failed to serialize gesture event");
                return;
            }
        };
        let result = value.and_then(|value| {
            if let Some(native) = original_event() {
                js_sys::Reflect::set(&value, &JsValue::from_str("originalEvent"), &native)?;
            }
            function.call1(&JsValue::NULL, &value)
        });
        if let Err(err) = result {
            tracing::warn!(?err, "gesture callback threw");
        }
    }
}

fn config_from(
    press: Option<Function>,
    drag: Option<Function>,
    release: Option<Function>,
    options_json: Option<String>,
) -> DomResult<DraggableConfig> {
    let options = match options_json.as_deref() {
        Some(json) => DraggableOptions::from_json(json)?,
        None => DraggableOptions::default(),
    };
    let mut config = DraggableConfig::new().options_from(options);
    if let Some(press) = press {
        config = config.on_press(js_handler(press));
    }
    if let Some(drag) = drag {
        config = config.on_drag(js_handler(drag));
    }
    if let Some(release) = release {
        config = config.on_release(js_handler(release));
    }
    Ok(config)
}

/// Draggable instance for JavaScript.
#[wasm_bindgen]
pub struct WasmDraggable {
    inner: DomDraggable,
}

#[wasm_bindgen]
impl WasmDraggable {
    /// Create a draggable. Every argument is optional; `options_json` is
    /// a JSON object such as `{"mouseOnly": true}`.
    ///
    /// # Errors
    ///
    /// Returns an error string if the options are not valid JSON.
    #[wasm_bindgen(constructor)]
    pub fn new(
        press: Option<Function>,
        drag: Option<Function>,
        release: Option<Function>,
        options_json: Option<String>,
    ) -> Result<WasmDraggable, JsValue> {
        let config = config_from(press, drag, release, options_json)?;
        Ok(Self {
            inner: DomDraggable::new(config),
        })
    }

    /// Attach to an element.
    ///
    /// # Errors
    ///
    /// Returns an error string if the element has no document or the
    /// draggable was destroyed.
    #[wasm_bindgen(js_name = bindTo)]
    pub fn bind_to(&self, element: &Element) -> Result<(), JsValue> {
        self.inner.bind_to(element)?;
        Ok(())
    }

    /// Replace callbacks and options.
    ///
    /// # Errors
    ///
    /// Returns an error string if the options are invalid or the
    /// draggable was destroyed.
    pub fn update(
        &self,
        press: Option<Function>,
        drag: Option<Function>,
        release: Option<Function>,
        options_json: Option<String>,
    ) -> Result<(), JsValue> {
        let config = config_from(press, drag, release, options_json)?;
        self.inner.update(config)?;
        Ok(())
    }

    /// Detach every listener. Safe to call repeatedly.
    pub fn destroy(&self) {
        self.inner.destroy();
    }

    /// Whether a gesture is in progress.
    #[wasm_bindgen(js_name = isActive)]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.inner.is_active()
    }
}
