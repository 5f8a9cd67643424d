use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};
use wirip_model::search::{visibility, Card, SearchAction, SearchEngine, SearchStep};
use wirip_shared::dom::{BLOG_CARD, BLOG_SUMMARY, BLOG_TITLE, SEARCH_INPUT};
use wirip_shared::UiConfig;

use crate::dom;

struct SearchState {
    engine: SearchEngine,
    /// Replaced on every keystroke; dropping the old one cancels it.
    timer: Option<Timeout>,
}

pub fn init(document: &Document, config: &UiConfig) {
    let Some(input) = dom::query(document, SEARCH_INPUT)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };

    let state = Rc::new(RefCell::new(SearchState {
        engine: SearchEngine::new(config.search_debounce_ms, config.min_query_len),
        timer: None,
    }));

    let field = input.clone();
    let document = document.clone();
    dom::listen(&input, "input", move |_| {
        let value = field.value();
        let mut guard = state.borrow_mut();
        guard.timer = None;

        let step = guard.engine.on_input(&value);
        match step {
            SearchStep::Now(action) => {
                drop(guard);
                apply(&document, &action);
            }
            SearchStep::Later(ticket) => {
                let wait = guard.engine.wait_ms();
                let state = state.clone();
                let document = document.clone();
                guard.timer = Some(Timeout::new(wait, move || {
                    let action = state.borrow_mut().engine.fire(ticket);
                    if let Some(action) = action {
                        apply(&document, &action);
                    }
                }));
            }
        }
    });
}

/// Show or hide every card, and its container, for `action`.
fn apply(document: &Document, action: &SearchAction) {
    let elements = dom::query_all(document, BLOG_CARD);
    let cards: Vec<Card> = elements
        .iter()
        .map(|card| {
            let text = |selector| {
                dom::query_in(card, selector)
                    .and_then(|el| el.text_content())
                    .unwrap_or_default()
            };
            Card::new(text(BLOG_TITLE), text(BLOG_SUMMARY))
        })
        .collect();

    for (card, visible) in elements.iter().zip(visibility(action, &cards)) {
        let display = if visible { "block" } else { "none" };
        dom::set_display(card, display);
        if let Some(parent) = card.parent_element() {
            dom::set_display(&parent, display);
        }
    }
}
