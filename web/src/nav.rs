use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node};
use wirip_model::nav::{should_close, ClickSite};
use wirip_shared::dom::{CLASS_SHOW, NAV_COLLAPSE, NAV_LINK, NAV_TOGGLER};

use crate::dom;

/// Close the open mobile menu on a nav-link click or a click outside the
/// menu. Closing clicks the toggle, the same control that opened it.
pub fn init(document: &Document) {
    let toggler = dom::query(document, NAV_TOGGLER).and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let (Some(toggler), Some(panel)) = (toggler, dom::query(document, NAV_COLLAPSE)) else {
        return;
    };

    for link in dom::query_all(&panel, NAV_LINK) {
        let toggler = toggler.clone();
        let panel = panel.clone();
        dom::listen(&link, "click", move |_| {
            close_if(&toggler, &panel, ClickSite::NavLink);
        });
    }

    dom::listen(document, "click", move |event| {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        let site = match target {
            Some(node) if toggler.contains(Some(&node)) || panel.contains(Some(&node)) => {
                ClickSite::Menu
            }
            _ => ClickSite::Outside,
        };
        close_if(&toggler, &panel, site);
    });
}

fn close_if(toggler: &HtmlElement, panel: &Element, site: ClickSite) {
    if should_close(dom::has_class(panel, CLASS_SHOW), site) {
        toggler.click();
    }
}
