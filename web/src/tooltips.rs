use js_sys::{Array, Function, Reflect};
use tracing::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Window};
use wirip_shared::dom::TOOLTIP_TRIGGERS;

use crate::dom;

/// `new bootstrap.Tooltip(el)` for every trigger, when Bootstrap is loaded.
pub fn init(window: &Window, document: &Document) {
    if !dom::has_global(window, "bootstrap") {
        return;
    }
    let Some(tooltip) = Reflect::get(window.as_ref(), &JsValue::from_str("bootstrap"))
        .and_then(|bootstrap| Reflect::get(&bootstrap, &JsValue::from_str("Tooltip")))
        .ok()
        .and_then(|ctor| ctor.dyn_into::<Function>().ok())
    else {
        return;
    };

    for trigger in dom::query_all(document, TOOLTIP_TRIGGERS) {
        if let Err(err) = Reflect::construct(&tooltip, &Array::of1(&trigger)) {
            debug!(error = %dom::js_error_message(err), "tooltip init failed");
        }
    }
}
