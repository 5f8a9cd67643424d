//! One-shot intersection observation shared by the lazy loader and the
//! scroll animator.

use std::cell::RefCell;

use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};
use wirip_model::viewport::ViewportTracker;
use wirip_model::Result;

use crate::dom;

/// Run `on_enter` once per element, the first time it intersects, then
/// unobserve it. Without `IntersectionObserver` every element fires
/// immediately, in document order.
pub fn once<F>(
    window: &Window,
    elements: Vec<Element>,
    options: Option<&IntersectionObserverInit>,
    mut on_enter: F,
) -> Result<()>
where
    F: FnMut(&Element) + 'static,
{
    if elements.is_empty() {
        return Ok(());
    }

    let mut tracker = ViewportTracker::new(elements.len());

    if !dom::has_global(window, "IntersectionObserver") {
        for index in tracker.drain() {
            on_enter(&elements[index]);
        }
        return Ok(());
    }

    let tracker = RefCell::new(tracker);
    let targets = elements.clone();
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let Some(index) = targets.iter().position(|el| *el == target) else {
                continue;
            };
            if tracker.borrow_mut().on_entry(index, entry.is_intersecting()) {
                on_enter(&target);
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let observer = match options {
        Some(options) => {
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)
        }
        None => IntersectionObserver::new(callback.as_ref().unchecked_ref()),
    }
    .map_err(dom::js_error)?;

    for element in &elements {
        observer.observe(element);
    }
    callback.forget();
    Ok(())
}
