use contracts::dashboards::d400_content_report::{ContentReport, ReportRow};

/// Tabular facets of the report, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportTab {
    Teacher,
    Student,
    Content,
    Monthly,
}

impl ReportTab {
    pub const ALL: [ReportTab; 4] = [
        ReportTab::Teacher,
        ReportTab::Student,
        ReportTab::Content,
        ReportTab::Monthly,
    ];

    /// Columns shown for the tab, in display order
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            ReportTab::Teacher => &["professor", "agendamentos", "horas"],
            ReportTab::Student => &["aluno", "agendamentos", "horas"],
            ReportTab::Content => &["conteudo", "agendamentos", "horas"],
            ReportTab::Monthly => &["mes", "agendamentos", "horas"],
        }
    }

    pub fn rows(self, report: &ContentReport) -> Option<&[ReportRow]> {
        match self {
            ReportTab::Teacher => report.by_teacher.as_deref(),
            ReportTab::Student => report.by_student.as_deref(),
            ReportTab::Content => report.by_content.as_deref(),
            ReportTab::Monthly => report.monthly.as_deref(),
        }
    }
}
