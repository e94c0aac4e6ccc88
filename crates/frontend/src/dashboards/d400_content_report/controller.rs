use crate::dashboards::d400_content_report::api::{report_url, ReportError, ReportSource};
use contracts::dashboards::d400_content_report::{ContentReport, DateRange};
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

pub const MISSING_DATES_MESSAGE: &str = "Por favor, selecione o período inicial e final.";
pub const REPORT_FAILED_MESSAGE: &str = "Erro ao gerar relatório. Tente novamente.";

/// Page-side effects of a report request
pub trait ReportView {
    fn set_loading(&self, visible: bool);

    /// Replace the summary card and every tab with `report`
    fn show_report(&self, report: &ContentReport);

    fn set_export_href(&self, href: &str);

    /// Blocking message to the user
    fn alert(&self, message: &str);
}

/// Drives one report form: validates input, fetches, updates the page.
///
/// Submissions may overlap. Each one takes a ticket and only the holder of
/// the newest ticket may touch the page when its response arrives.
pub struct ReportController<S, V> {
    source: S,
    view: V,
    export_route: String,
    latest: Cell<u64>,
}

impl<S, V> ReportController<S, V>
where
    S: ReportSource + 'static,
    V: ReportView + 'static,
{
    pub fn new(source: S, view: V, export_route: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            source,
            view,
            export_route: export_route.into(),
            latest: Cell::new(0),
        })
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Validate the form values and start a request.
    ///
    /// On missing dates the user is alerted and nothing else happens. On
    /// success the returned future performs the fetch and the page update;
    /// the caller decides where to spawn it.
    pub fn submit(
        self: &Rc<Self>,
        start: &str,
        end: &str,
    ) -> Result<impl Future<Output = ()> + 'static, ReportError> {
        let Some(range) = DateRange::from_inputs(start, end) else {
            self.view.alert(MISSING_DATES_MESSAGE);
            return Err(ReportError::MissingDates);
        };

        let ticket = self.latest.get() + 1;
        self.latest.set(ticket);
        self.view.set_loading(true);

        let controller = Rc::clone(self);
        Ok(async move {
            let outcome = controller.source.fetch(&range).await;
            controller.finish(ticket, &range, outcome);
        })
    }

    fn finish(
        &self,
        ticket: u64,
        range: &DateRange,
        outcome: Result<ContentReport, ReportError>,
    ) {
        if ticket != self.latest.get() {
            log::debug!(
                "Discarding superseded report for {}..{} (ok: {})",
                range.start,
                range.end,
                outcome.is_ok()
            );
            return;
        }

        self.view.set_loading(false);

        match outcome {
            Ok(report) => {
                self.view.show_report(&report);
                match report_url(&self.export_route, range) {
                    Ok(href) => self.view.set_export_href(&href),
                    Err(e) => log::error!("Failed to build export link: {}", e),
                }
            }
            Err(e) => {
                log::error!("Erro ao gerar relatório: {}", e);
                self.view.alert(REPORT_FAILED_MESSAGE);
            }
        }
    }
}
