use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use wirip_model::form::{validate_required, FieldAnnotations};
use wirip_shared::dom::{CLASS_FIELD_ERROR, CLASS_INVALID, FIELD_ERROR, REQUIRED_FIELDS};

use crate::dom;

/// Errors are rendered as a sibling element directly after the field.
struct DomAnnotations<'a> {
    document: &'a Document,
    fields: &'a [Element],
}

impl DomAnnotations<'_> {
    fn existing_error(field: &Element) -> Option<Element> {
        field
            .next_element_sibling()
            .filter(|el| el.matches(FIELD_ERROR).unwrap_or(false))
    }
}

impl FieldAnnotations for DomAnnotations<'_> {
    fn clear_error(&mut self, field: usize) {
        let Some(field) = self.fields.get(field) else {
            return;
        };
        if let Some(error) = Self::existing_error(field) {
            error.remove();
        }
        let _ = field.class_list().remove_1(CLASS_INVALID);
    }

    fn add_error(&mut self, field: usize, message: &str) {
        let Some(field) = self.fields.get(field) else {
            return;
        };
        if let Ok(error) = self.document.create_element("div") {
            error.set_class_name(CLASS_FIELD_ERROR);
            error.set_text_content(Some(message));
            let _ = field.insert_adjacent_element("afterend", &error);
        }
        let _ = field.class_list().add_1(CLASS_INVALID);
    }
}

fn field_value(field: &Element) -> String {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

/// Check every required field of the form with id `form_id`, marking blank
/// ones and clearing the rest. False when the form does not exist.
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(form_id: &str) -> bool {
    let Ok(document) = dom::document() else {
        return false;
    };
    let Some(form) = document.get_element_by_id(form_id) else {
        return false;
    };

    let fields = dom::query_all(&form, REQUIRED_FIELDS);
    let values: Vec<String> = fields.iter().map(field_value).collect();
    let mut annotations = DomAnnotations {
        document: &document,
        fields: &fields,
    };
    validate_required(&values, &mut annotations).is_valid()
}
