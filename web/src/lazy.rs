use tracing::debug;
use web_sys::{Document, Element, Window};
use wirip_model::Result;
use wirip_shared::dom::{ATTR_DATA_SRC, CLASS_LAZY, LAZY_IMAGES};

use crate::{dom, observe};

pub fn init(window: &Window, document: &Document) -> Result<()> {
    let images = dom::query_all(document, LAZY_IMAGES);
    debug!(count = images.len(), "lazy images");
    observe::once(window, images, None, load)
}

fn load(img: &Element) {
    if let Some(src) = img.get_attribute(ATTR_DATA_SRC) {
        let _ = img.set_attribute("src", &src);
    }
    let _ = img.class_list().remove_1(CLASS_LAZY);
}
