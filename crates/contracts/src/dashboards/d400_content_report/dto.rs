use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Response of the JSON report route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentReport {
    #[serde(rename = "resumo")]
    pub summary: ReportSummary,
    /// Rows per teacher; `None` when the key is missing or null
    #[serde(rename = "by_professor")]
    pub by_teacher: Option<Vec<ReportRow>>,
    #[serde(rename = "by_aluno")]
    pub by_student: Option<Vec<ReportRow>>,
    #[serde(rename = "by_conteudo")]
    pub by_content: Option<Vec<ReportRow>>,
    pub monthly: Option<Vec<ReportRow>>,
}

/// Totals for the requested period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Period start as sent by the server (YYYY-MM-DD)
    #[serde(rename = "periodo_inicial")]
    pub period_start: String,
    #[serde(rename = "periodo_final")]
    pub period_end: String,
    #[serde(rename = "total_agendamentos")]
    pub total_bookings: i64,
    #[serde(rename = "total_horas")]
    pub total_hours: f64,
    #[serde(rename = "media_duracao_min")]
    pub avg_duration_minutes: f64,
}

/// Scalar value of a single table cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(v) => write!(f, "{}", v),
            CellValue::Float(v) => f.write_str(&format_number(*v)),
            CellValue::Text(v) => f.write_str(v),
            CellValue::Bool(v) => write!(f, "{}", v),
        }
    }
}

/// Number text the way the browser prints it: integral values without a
/// fraction (45.0 -> "45"), no "-0", exponent form outside [1e-6, 1e21)
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let abs = value.abs();
    if (1e-6..1e21).contains(&abs) {
        return value.to_string();
    }

    // `{:e}` leaves out the sign of positive exponents
    let text = format!("{:e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => text,
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

/// One row of a report facet, keyed by column name.
///
/// The set of columns shown is chosen by the caller; a row may lack some of
/// them or carry `null`, both of which read as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportRow(BTreeMap<String, Option<CellValue>>);

impl ReportRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for fixtures
    pub fn with(mut self, column: &str, value: impl Into<CellValue>) -> Self {
        self.0.insert(column.to_string(), Some(value.into()));
        self
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.0.get(column).and_then(Option::as_ref)
    }

    /// Display text of a column, empty when the value is absent
    pub fn display(&self, column: &str) -> String {
        self.get(column).map(ToString::to_string).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "resumo": {
            "periodo_inicial": "2024-01-01",
            "periodo_final": "2024-01-31",
            "total_agendamentos": 10,
            "total_horas": 25.5,
            "media_duracao_min": 45
        },
        "by_professor": [{"professor": "Ana", "agendamentos": 5, "horas": 12.5}],
        "by_aluno": [],
        "by_conteudo": [],
        "monthly": [],
        "agendamentos_rows": [{"id": 1}]
    }"#;

    #[test]
    fn test_decode_sample_report() {
        let report: ContentReport = serde_json::from_str(SAMPLE).unwrap();

        assert_eq!(report.summary.period_start, "2024-01-01");
        assert_eq!(report.summary.period_end, "2024-01-31");
        assert_eq!(report.summary.total_bookings, 10);
        assert_eq!(report.summary.total_hours, 25.5);
        assert_eq!(report.summary.avg_duration_minutes, 45.0);

        let teachers = report.by_teacher.unwrap();
        assert_eq!(teachers.len(), 1);
        assert_eq!(teachers[0].get("agendamentos"), Some(&CellValue::Integer(5)));
        assert_eq!(teachers[0].get("horas"), Some(&CellValue::Float(12.5)));
        assert_eq!(report.by_student, Some(vec![]));
    }

    #[test]
    fn test_missing_and_null_lists_are_absent() {
        let json = r#"{
            "resumo": {
                "periodo_inicial": "2024-01-01",
                "periodo_final": "2024-01-31",
                "total_agendamentos": 0,
                "total_horas": 0.0,
                "media_duracao_min": 0
            },
            "by_professor": null
        }"#;
        let report: ContentReport = serde_json::from_str(json).unwrap();
        assert!(report.by_teacher.is_none());
        assert!(report.by_student.is_none());
        assert!(report.by_content.is_none());
        assert!(report.monthly.is_none());
    }

    #[test]
    fn test_missing_summary_is_an_error() {
        let json = r#"{"by_professor": []}"#;
        assert!(serde_json::from_str::<ContentReport>(json).is_err());
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(CellValue::Integer(5).to_string(), "5");
        assert_eq!(CellValue::Float(12.5).to_string(), "12.5");
        assert_eq!(CellValue::Float(45.0).to_string(), "45");
        assert_eq!(CellValue::from("Ana").to_string(), "Ana");
        assert_eq!(CellValue::Bool(true).to_string(), "true");
    }

    #[test]
    fn test_float_display_edges() {
        assert_eq!(CellValue::Float(-0.0).to_string(), "0");
        assert_eq!(CellValue::Float(1e21).to_string(), "1e+21");
        assert_eq!(CellValue::Float(1.5e21).to_string(), "1.5e+21");
        assert_eq!(CellValue::Float(-2e22).to_string(), "-2e+22");
        assert_eq!(CellValue::Float(1e-7).to_string(), "1e-7");
        assert_eq!(CellValue::Float(0.000001).to_string(), "0.000001");
        assert_eq!(CellValue::Float(123456789.0).to_string(), "123456789");
        assert_eq!(CellValue::Float(-3.25).to_string(), "-3.25");
    }

    #[test]
    fn test_absent_cells_display_empty() {
        let row: ReportRow =
            serde_json::from_str(r#"{"professor": "Ana", "horas": null}"#).unwrap();
        assert_eq!(row.display("professor"), "Ana");
        assert_eq!(row.display("horas"), "");
        assert_eq!(row.display("agendamentos"), "");
        assert!(row.get("horas").is_none());
    }

    #[test]
    fn test_row_builder() {
        let row = ReportRow::new().with("mes", "2024-01").with("agendamentos", 3i64);
        assert_eq!(row.display("mes"), "2024-01");
        assert_eq!(row.display("agendamentos"), "3");
    }
}
