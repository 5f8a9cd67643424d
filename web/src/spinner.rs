use tracing::warn;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use wirip_model::Result;
use wirip_shared::dom::{CLASS_LOADING, CLASS_SPINNER, LOADING_SPINNER, SPINNER_HTML};

use crate::dom;

/// Overlay a spinner on `element`. A second call keeps the one spinner.
#[wasm_bindgen(js_name = showLoadingSpinner)]
pub fn show_loading_spinner(element: &Element) {
    if let Err(err) = show(element) {
        warn!(error = %err, "spinner not shown");
    }
}

fn show(element: &Element) -> Result<()> {
    if dom::query_in(element, LOADING_SPINNER).is_none() {
        let spinner = dom::document()?
            .create_element("div")
            .map_err(dom::js_error)?;
        spinner.set_class_name(CLASS_SPINNER);
        spinner.set_inner_html(SPINNER_HTML);
        element.append_child(&spinner).map_err(dom::js_error)?;
    }
    element.class_list().add_1(CLASS_LOADING).map_err(dom::js_error)
}

#[wasm_bindgen(js_name = hideLoadingSpinner)]
pub fn hide_loading_spinner(element: &Element) {
    if let Some(spinner) = dom::query_in(element, LOADING_SPINNER) {
        spinner.remove();
    }
    let _ = element.class_list().remove_1(CLASS_LOADING);
}
