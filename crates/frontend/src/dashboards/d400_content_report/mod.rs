//! Booking report by content: form handling and tabbed rendering of
//! `/relatorios/conteudos/json/`.

pub mod api;
pub mod controller;
pub mod page;
pub mod tabs;
pub mod ui;

pub use api::{HttpReportSource, ReportError, ReportSource};
pub use controller::{ReportController, ReportView};
pub use page::ReportPage;
pub use tabs::ReportTab;

use crate::shared::config::PageConfig;
use crate::shared::dom::PageError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event};

/// Bind the report form of `document` to the report endpoint
pub fn attach(document: &Document, config: &PageConfig) -> Result<(), PageError> {
    let page = ReportPage::resolve(document, &config.elements)?;
    let form = page.form().clone();
    let source = HttpReportSource::new(config.endpoints.report_json.clone());
    let controller = ReportController::new(source, page, config.endpoints.export.clone());

    let on_submit = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        let (start, end) = controller.view().date_inputs();
        if let Ok(task) = controller.submit(&start, &end) {
            spawn_local(task);
        }
    }) as Box<dyn FnMut(_)>);

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();

    log::info!("Content report bound to #{}", config.elements.form);
    Ok(())
}
