//! Booking report by content: data returned by the report endpoint and the
//! query both report routes accept.

mod dto;
mod query;

pub use dto::{format_number, CellValue, ContentReport, ReportRow, ReportSummary};
pub use query::DateRange;

/// JSON report route
pub const JSON_ENDPOINT: &str = "/relatorios/conteudos/json/";

/// Spreadsheet export route (only linked, never fetched by the page)
pub const EXPORT_ENDPOINT: &str = "/relatorios/conteudos/export/";
