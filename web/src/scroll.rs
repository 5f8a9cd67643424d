use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use wirip_model::nav::anchor_target;
use wirip_shared::dom::SAME_PAGE_ANCHORS;

use crate::dom;

/// Smooth-scroll same-page anchors whose target exists. Anything else keeps
/// the browser's default navigation.
pub fn init(document: &Document) {
    for link in dom::query_all(document, SAME_PAGE_ANCHORS) {
        let anchor = link.clone();
        let document = document.clone();
        dom::listen(&link, "click", move |event| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let Some(target) = anchor_target(&href).and_then(|sel| dom::query(&document, sel))
            else {
                return;
            };
            event.prevent_default();

            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        });
    }
}
