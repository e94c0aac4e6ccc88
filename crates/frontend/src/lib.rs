pub mod dashboards;
pub mod shared;

use shared::config::PageConfig;
use shared::dom::PageError;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;
use web_sys::Document;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    if let Err(e) = bind_when_ready() {
        log::error!("Content report page not started: {}", e);
    }
}

/// Bind now if the page is parsed, otherwise on `DOMContentLoaded`
fn bind_when_ready() -> Result<(), PageError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(PageError::NoDocument)?;

    if is_parsed(&document.ready_state()) {
        return bind(&document);
    }

    let ready_document = document.clone();
    let on_ready = wasm_bindgen::closure::Closure::once_into_js(move || {
        if let Err(e) = bind(&ready_document) {
            log::error!("Content report page not started: {}", e);
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    Ok(())
}

/// `document.readyState` is "loading" until the markup has been parsed
fn is_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

fn bind(document: &Document) -> Result<(), PageError> {
    let config = PageConfig::load(document)?;
    dashboards::d400_content_report::attach(document, &config)
}
