use contracts::dashboards::d400_content_report::{format_number, ReportSummary};
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryField {
    pub label: &'static str,
    pub value: String,
}

/// The four labeled lines of the summary tab
pub fn summary_fields(summary: &ReportSummary) -> Vec<SummaryField> {
    vec![
        SummaryField {
            label: "Período:",
            value: format!("{} a {}", summary.period_start, summary.period_end),
        },
        SummaryField {
            label: "Total de Agendamentos:",
            value: summary.total_bookings.to_string(),
        },
        SummaryField {
            label: "Total de Horas:",
            value: format_number(summary.total_hours),
        },
        SummaryField {
            label: "Média de Duração (min):",
            value: format_number(summary.avg_duration_minutes),
        },
    ]
}

#[component]
pub fn SummaryCard(fields: Vec<SummaryField>) -> impl IntoView {
    view! {
        <div class="card card-body shadow-sm">
            {fields
                .into_iter()
                .map(|field| {
                    view! {
                        <p>
                            <strong>{field.label}</strong>
                            " "
                            {field.value}
                        </p>
                    }
                })
                .collect_view()}
        </div>
    }
}
