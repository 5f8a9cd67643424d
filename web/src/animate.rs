use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, IntersectionObserverInit, Window};
use wirip_model::Result;
use wirip_shared::dom::{ANIMATED_CARDS, CLASS_REVEAL};
use wirip_shared::{stagger_delay, UiConfig};

use crate::{dom, observe};

/// Stagger the cards' animation delays by index, then reveal each one the
/// first time it scrolls into view.
pub fn init(window: &Window, document: &Document, config: &UiConfig) -> Result<()> {
    let cards = dom::query_all(document, ANIMATED_CARDS);

    for (index, card) in cards.iter().enumerate() {
        if let Some(card) = card.dyn_ref::<HtmlElement>() {
            let delay = stagger_delay(index, config.stagger_step_s);
            let _ = card.style().set_property("animation-delay", &delay);
        }
    }

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    options.set_root_margin(&config.reveal_root_margin);

    observe::once(window, cards, Some(&options), |card| {
        let _ = card.class_list().add_1(CLASS_REVEAL);
    })
}
