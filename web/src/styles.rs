use web_sys::Document;
use wirip_model::{Result, UiError};

use crate::dom;

const STYLE_ID: &str = "wirip-styles";

const CSS: &str = r#"
@keyframes fadeIn {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}
.animate-fade-in { animation: fadeIn 0.6s ease-out forwards; }
.success-animation {
    animation: pulse 0.6s ease-in-out;
    background-color: var(--success) !important;
}
.error-animation {
    animation: shake 0.6s ease-in-out;
    background-color: var(--danger) !important;
}
@keyframes pulse {
    0% { transform: scale(1); }
    50% { transform: scale(1.1); }
    100% { transform: scale(1); }
}
@keyframes shake {
    0%, 100% { transform: translateX(0); }
    25% { transform: translateX(-5px); }
    75% { transform: translateX(5px); }
}
.loading-spinner {
    position: absolute;
    top: 50%;
    left: 50%;
    transform: translate(-50%, -50%);
    font-size: 1.5rem;
    color: var(--pink-primary);
}
.loading { position: relative; pointer-events: none; opacity: 0.7; }
.notification-toast {
    position: fixed;
    top: 100px;
    right: 20px;
    z-index: 1060;
    min-width: 300px;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.3);
}
.field-error { font-size: 0.875rem; }
.is-invalid {
    border-color: var(--danger) !important;
    box-shadow: 0 0 0 0.2rem rgba(220, 53, 69, 0.25) !important;
}
"#;

/// Append the behaviours' stylesheet to `<head>` once.
pub fn inject(document: &Document) -> Result<()> {
    if document.get_element_by_id(STYLE_ID).is_some() {
        return Ok(());
    }
    let head = document
        .head()
        .ok_or_else(|| UiError::Dom("no head".to_string()))?;
    let style = document.create_element("style").map_err(dom::js_error)?;
    style.set_id(STYLE_ID);
    style.set_text_content(Some(CSS));
    head.append_child(&style).map_err(dom::js_error)?;
    Ok(())
}
