use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use tracing::warn;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use wirip_model::notify::NotificationCenter;
use wirip_model::{Result, UiError};
use wirip_shared::dom::NOTIFICATION_CONTAINER;
use wirip_shared::NOTIFICATION_MS;

use crate::dom;

thread_local! {
    static CENTER: RefCell<NotificationCenter> = RefCell::new(NotificationCenter::new(NOTIFICATION_MS));
}

/// Set the default banner lifetime.
pub fn configure(default_ms: u32) {
    CENTER.with(|center| center.borrow_mut().set_default_ms(default_ms));
}

/// Show a dismissible banner at the top of `.container` (or `<body>`).
/// It removes itself after `duration_ms`, default 5000.
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, severity: Option<String>, duration_ms: Option<u32>) {
    if let Err(err) = show(message, severity.as_deref(), duration_ms) {
        warn!(error = %err, "notification not shown");
    }
}

fn show(message: &str, severity: Option<&str>, duration_ms: Option<u32>) -> Result<()> {
    let document = dom::document()?;
    let container: Element = match dom::query(&document, NOTIFICATION_CONTAINER) {
        Some(container) => container,
        None => document
            .body()
            .map(Into::into)
            .ok_or_else(|| UiError::Dom("no container for notification".to_string()))?,
    };

    let notification = CENTER.with(|center| center.borrow_mut().show(severity, duration_ms));

    let banner = document.create_element("div").map_err(dom::js_error)?;
    banner.set_class_name(&notification.class_name());
    banner.set_attribute("role", "alert").map_err(dom::js_error)?;
    banner
        .append_child(&document.create_text_node(message))
        .map_err(dom::js_error)?;

    let close = document.create_element("button").map_err(dom::js_error)?;
    close.set_class_name("btn-close");
    close.set_attribute("type", "button").map_err(dom::js_error)?;
    close
        .set_attribute("data-bs-dismiss", "alert")
        .map_err(dom::js_error)?;
    close
        .set_attribute("aria-label", "Close")
        .map_err(dom::js_error)?;
    banner.append_child(&close).map_err(dom::js_error)?;

    container
        .insert_before(&banner, container.first_child().as_ref())
        .map_err(dom::js_error)?;

    let id = notification.id;
    {
        let banner = banner.clone();
        dom::listen(&close, "click", move |_| {
            if CENTER.with(|center| center.borrow_mut().dismiss(id)) {
                banner.remove();
            }
        });
    }
    Timeout::new(notification.duration_ms, move || {
        if CENTER.with(|center| center.borrow_mut().expire(id)) {
            banner.remove();
        }
    })
    .forget();

    Ok(())
}
