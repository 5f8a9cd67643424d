use web_sys::Document;
use wirip_shared::{dom::UI_CONFIG_ID, UiConfig};

/// Read the page's inline config block. A missing block is the default
/// config; a malformed one is reported so the caller can log it once
/// logging is up, and also falls back to the default.
pub fn load(document: &Document) -> (UiConfig, Option<serde_json::Error>) {
    let Some(text) = document
        .get_element_by_id(UI_CONFIG_ID)
        .and_then(|el| el.text_content())
    else {
        return (UiConfig::default(), None);
    };

    match UiConfig::from_json(&text) {
        Ok(config) => (config, None),
        Err(err) => (UiConfig::default(), Some(err)),
    }
}
