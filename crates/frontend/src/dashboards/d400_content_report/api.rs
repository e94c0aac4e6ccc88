use async_trait::async_trait;
use contracts::dashboards::d400_content_report::{ContentReport, DateRange};
use gloo_net::http::Request;
use thiserror::Error;

/// Failures of a report request
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("start and end dates are required")]
    MissingDates,

    #[error("Request failed: {0}")]
    Network(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to build query: {0}")]
    Query(String),
}

/// Where the report data comes from
#[async_trait(?Send)]
pub trait ReportSource {
    async fn fetch(&self, range: &DateRange) -> Result<ContentReport, ReportError>;
}

/// `<route>?start=..&end=..` for either report route
pub fn report_url(route: &str, range: &DateRange) -> Result<String, ReportError> {
    let query = serde_qs::to_string(range).map_err(|e| ReportError::Query(e.to_string()))?;
    Ok(format!("{}?{}", route, query))
}

/// Fetches the report from the JSON route of the server
pub struct HttpReportSource {
    route: String,
}

impl HttpReportSource {
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
        }
    }
}

#[async_trait(?Send)]
impl ReportSource for HttpReportSource {
    async fn fetch(&self, range: &DateRange) -> Result<ContentReport, ReportError> {
        let url = report_url(&self.route, range)?;

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ReportError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ReportError::Status(response.status()));
        }

        response
            .json::<ContentReport>()
            .await
            .map_err(|e| ReportError::Decode(e.to_string()))
    }
}
