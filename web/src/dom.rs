//! Small document helpers shared by every behaviour.

use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};
use wirip_model::{Result, UiError};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| UiError::Dom("no window".to_string()))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| UiError::Dom("no document".to_string()))
}

/// Milliseconds since the epoch, the clock every engine runs on.
pub fn now() -> f64 {
    js_sys::Date::now()
}

/// Convert a thrown JS value into a `UiError::Dom`.
pub fn js_error(err: JsValue) -> UiError {
    UiError::Dom(js_error_message(err))
}

pub fn js_error_message(err: JsValue) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    if let Ok(error) = err.dyn_into::<js_sys::Error>() {
        return error.message().into();
    }
    "unknown error".to_string()
}

/// Every element under `root` matching `selector`, in document order.
/// A bad selector yields nothing.
pub fn query_all(root: &impl AsRef<web_sys::Node>, selector: &str) -> Vec<Element> {
    let node: &web_sys::Node = root.as_ref();
    let list = if let Some(document) = node.dyn_ref::<Document>() {
        document.query_selector_all(selector)
    } else if let Some(element) = node.dyn_ref::<Element>() {
        element.query_selector_all(selector)
    } else {
        return Vec::new();
    };
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// `querySelector`, treating a bad selector as no match.
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub fn set_display(element: &Element, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property("display", value);
    }
}

/// Whether `name` is defined on the global object.
pub fn has_global(window: &Window, name: &str) -> bool {
    Reflect::has(window.as_ref(), &JsValue::from_str(name)).unwrap_or(false)
}

/// Attach an event listener for the page's lifetime.
pub fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
