//! Page-callable utilities: debounce, throttle, clipboard copy.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use gloo_timers::callback::Timeout;
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlTextAreaElement};
use wirip_model::clipboard::{copy_with_fallback, ClipboardBackend};
use wirip_model::timing::{Debouncer, Throttle};
use wirip_model::{Result, UiError};

use crate::dom;

// ── debounce / throttle ────────────────────────────────────────────────────

/// Wrap a Rust callback taking `(this, args)` into a variadic JS function.
fn variadic(inner: JsValue) -> std::result::Result<Function, JsValue> {
    let shim = Function::new_with_args(
        "f",
        "return function() { return f(this, Array.prototype.slice.call(arguments)); };",
    );
    shim.call1(&JsValue::UNDEFINED, &inner)?.dyn_into()
}

struct Debounced {
    debouncer: Debouncer<Array>,
    /// Dropping the previous timer clears it.
    timer: Option<Timeout>,
}

/// `fn` runs with the latest arguments once `wait` ms pass with no newer
/// call. Every wrapper has its own timer.
#[wasm_bindgen]
pub fn debounce(func: Function, wait: u32) -> std::result::Result<Function, JsValue> {
    let state = Rc::new(RefCell::new(Debounced {
        debouncer: Debouncer::new(wait),
        timer: None,
    }));

    let wrapper = Closure::wrap(Box::new(move |_this: JsValue, args: Array| {
        let mut guard = state.borrow_mut();
        let ticket = guard.debouncer.call(args);

        let state = state.clone();
        let func = func.clone();
        guard.timer = Some(Timeout::new(wait, move || {
            let args = state.borrow_mut().debouncer.fire(ticket);
            if let Some(args) = args {
                let _ = func.apply(&JsValue::UNDEFINED, &args);
            }
        }));
    }) as Box<dyn Fn(JsValue, Array)>);

    variadic(wrapper.into_js_value())
}

/// `fn` runs on the first call, then not again until `limit` ms have
/// passed; the next call after that runs and restarts the cooldown.
#[wasm_bindgen]
pub fn throttle(func: Function, limit: u32) -> std::result::Result<Function, JsValue> {
    let gate = RefCell::new(Throttle::new(limit));

    let wrapper = Closure::wrap(Box::new(move |this: JsValue, args: Array| {
        let fire = gate.borrow_mut().try_fire(dom::now());
        if fire {
            let _ = func.apply(&this, &args);
        }
    }) as Box<dyn Fn(JsValue, Array)>);

    variadic(wrapper.into_js_value())
}

// ── clipboard ──────────────────────────────────────────────────────────────

struct BrowserClipboard;

/// Removes the temporary textarea however the copy ends.
struct Detached(Element);

impl Drop for Detached {
    fn drop(&mut self) {
        self.0.remove();
    }
}

#[async_trait(?Send)]
impl ClipboardBackend for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let navigator = dom::window()?.navigator();
        if !Reflect::has(&navigator, &JsValue::from_str("clipboard")).unwrap_or(false) {
            return Err(UiError::Clipboard("clipboard api unavailable".to_string()));
        }
        JsFuture::from(navigator.clipboard().write_text(text))
            .await
            .map(|_| ())
            .map_err(|err| UiError::Clipboard(dom::js_error_message(err)))
    }

    fn legacy_copy(&self, text: &str) -> Result<bool> {
        let document = dom::document()?;
        let body = document
            .body()
            .ok_or_else(|| UiError::Dom("no body".to_string()))?;

        let textarea = document
            .create_element("textarea")
            .map_err(dom::js_error)?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| UiError::Dom("not a textarea".to_string()))?;
        textarea.set_value(text);
        textarea.set_attribute("readonly", "").map_err(dom::js_error)?;
        let _ = textarea.style().set_property("position", "absolute");
        let _ = textarea.style().set_property("left", "-9999px");

        body.append_child(&textarea).map_err(dom::js_error)?;
        let _detached = Detached(textarea.clone().into());
        textarea.select();

        let exec = Reflect::get(document.as_ref(), &JsValue::from_str("execCommand"))
            .map_err(dom::js_error)?;
        let Ok(exec) = exec.dyn_into::<Function>() else {
            return Ok(false);
        };
        let copied = exec
            .call1(document.as_ref(), &JsValue::from_str("copy"))
            .map_err(|err| UiError::Clipboard(dom::js_error_message(err)))?;
        Ok(copied.as_bool().unwrap_or(false))
    }
}

/// Copy `text`, falling back to a hidden textarea and the copy command.
/// Resolves to whether either path succeeded; never rejects.
#[wasm_bindgen(js_name = copyToClipboard)]
pub async fn copy_to_clipboard(text: String) -> bool {
    copy_with_fallback(&BrowserClipboard, &text).await
}
