//! # WiRiP Web Crate
//!
//! Binds the wirip-model engines to the live page. `start` runs when the
//! module loads and wires every behaviour once the document is parsed;
//! the rest of the exports are called from page scripts.
//!
//! Nothing here decides behaviour. Handlers read the DOM, ask an engine,
//! and write the answer back. Failures are logged and the page carries on.

mod animate;
mod config;
mod dom;
mod lazy;
mod logging;
mod nav;
mod observe;
mod scroll;
mod search;
mod styles;
mod tooltips;
mod vote;

pub mod form;
pub mod notify;
pub mod spinner;
pub mod util;

use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use wirip_model::Result;

pub use form::validate_form;
pub use notify::show_notification;
pub use spinner::{hide_loading_spinner, show_loading_spinner};
pub use util::{copy_to_clipboard, debounce, throttle};

#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    logging::install_panic_hook();
    let document = dom::document().map_err(|err| JsValue::from_str(&err.to_string()))?;

    if document.ready_state() == "loading" {
        dom::listen(&document, "DOMContentLoaded", |_| boot());
    } else {
        boot();
    }
    Ok(())
}

fn boot() {
    if let Err(err) = init_all() {
        warn!(error = %err, "page behaviours not started");
    }
}

/// Log a component that failed to start; the others still run.
fn report(component: &str, outcome: Result<()>) {
    if let Err(err) = outcome {
        warn!(component, error = %err, "component init failed");
    }
}

fn init_all() -> Result<()> {
    let window = dom::window()?;
    let document = dom::document()?;

    let (config, config_error) = config::load(&document);
    logging::init(&config.log_level);
    if let Some(err) = config_error {
        warn!(error = %err, "ignoring malformed ui config");
    }

    report("styles", styles::inject(&document));
    notify::configure(config.notification_ms);

    scroll::init(&document);
    report("lazy", lazy::init(&window, &document));
    tooltips::init(&window, &document);
    nav::init(&document);
    search::init(&document, &config);
    report("animate", animate::init(&window, &document, &config));
    vote::init(&document, &config);

    info!(endpoint = %config.vote_endpoint, "page behaviours ready");
    Ok(())
}
