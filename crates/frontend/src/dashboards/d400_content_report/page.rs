use crate::dashboards::d400_content_report::controller::ReportView;
use crate::dashboards::d400_content_report::tabs::ReportTab;
use crate::dashboards::d400_content_report::ui::{summary_fields, SummaryCard, TabContent, TabPanel};
use crate::shared::config::ElementIds;
use crate::shared::dom::{element_by_id, js_error_message, query_within, PageError};
use contracts::dashboards::d400_content_report::ContentReport;
use leptos::prelude::*;
use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use web_sys::{Document, HtmlAnchorElement, HtmlElement, HtmlFormElement, HtmlInputElement};

/// Mount handle of a rendered fragment; dropping it unmounts the fragment
type MountedView = Box<dyn Any>;

/// Handles to every element of the report page, resolved once at start-up
pub struct ReportPage {
    form: HtmlFormElement,
    start_input: HtmlInputElement,
    end_input: HtmlInputElement,
    loading: HtmlElement,
    export_link: HtmlAnchorElement,
    summary: HtmlElement,
    tabs: Vec<(ReportTab, HtmlElement)>,
    mounted: RefCell<HashMap<String, MountedView>>,
}

impl ReportPage {
    pub fn resolve(document: &Document, ids: &ElementIds) -> Result<Self, PageError> {
        let form: HtmlFormElement = element_by_id(document, &ids.form)?;
        let start_input = query_within(&form, "[name=\"start\"]")?;
        let end_input = query_within(&form, "[name=\"end\"]")?;

        let tabs = ReportTab::ALL
            .iter()
            .map(|&tab| Ok((tab, element_by_id(document, ids.tab_container(tab))?)))
            .collect::<Result<Vec<(ReportTab, HtmlElement)>, PageError>>()?;

        Ok(Self {
            start_input,
            end_input,
            loading: element_by_id(document, &ids.loading)?,
            export_link: element_by_id(document, &ids.export_button)?,
            summary: element_by_id(document, &ids.summary)?,
            tabs,
            form,
            mounted: RefCell::new(HashMap::new()),
        })
    }

    pub fn form(&self) -> &HtmlFormElement {
        &self.form
    }

    /// Current `(start, end)` field values
    pub fn date_inputs(&self) -> (String, String) {
        (self.start_input.value(), self.end_input.value())
    }

    /// Replace whatever `container` shows with the view built by `render`
    fn replace_content<F>(&self, container: &HtmlElement, render: F)
    where
        F: FnOnce() -> AnyView + 'static,
    {
        // Also drops markup the server rendered before the first request.
        container.set_inner_html("");
        let handle = leptos::mount::mount_to(container.clone(), render);
        self.mounted
            .borrow_mut()
            .insert(container.id(), Box::new(handle));
    }
}

impl ReportView for ReportPage {
    fn set_loading(&self, visible: bool) {
        let display = if visible { "block" } else { "none" };
        if let Err(e) = self.loading.style().set_property("display", display) {
            log::error!("Failed to toggle loading indicator: {}", js_error_message(&e));
        }
    }

    fn show_report(&self, report: &ContentReport) {
        let fields = summary_fields(&report.summary);
        self.replace_content(&self.summary, move || {
            view! { <SummaryCard fields=fields /> }.into_any()
        });

        for (tab, container) in &self.tabs {
            let content = TabContent::for_tab(*tab, report);
            self.replace_content(container, move || {
                view! { <TabPanel content=content /> }.into_any()
            });
        }
    }

    fn set_export_href(&self, href: &str) {
        self.export_link.set_href(href);
    }

    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("No window to show alert: {}", message);
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            log::error!("Failed to show alert: {}", js_error_message(&e));
        }
    }
}
