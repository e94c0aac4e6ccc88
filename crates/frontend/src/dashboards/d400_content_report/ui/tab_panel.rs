use crate::dashboards::d400_content_report::tabs::ReportTab;
use contracts::dashboards::d400_content_report::{ContentReport, ReportRow};
use leptos::prelude::*;

pub const NO_DATA_MESSAGE: &str = "Sem dados disponíveis.";

/// Header labels and cell texts of a rendered table
#[derive(Debug, Clone, PartialEq)]
pub struct TableModel {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// What a tab container shows
#[derive(Debug, Clone, PartialEq)]
pub enum TabContent {
    NoData,
    Table(TableModel),
}

impl TabContent {
    /// Lay out `rows` against a fixed column list.
    ///
    /// Column and row order are kept as given. A row without a value for a
    /// column gets an empty cell.
    pub fn build(columns: &[&str], rows: Option<&[ReportRow]>) -> Self {
        let rows = match rows {
            Some(rows) if !rows.is_empty() => rows,
            _ => return TabContent::NoData,
        };

        let headers = columns.iter().map(|c| c.to_uppercase()).collect();
        let rows = rows
            .iter()
            .map(|row| columns.iter().map(|c| row.display(c)).collect())
            .collect();

        TabContent::Table(TableModel { headers, rows })
    }

    pub fn for_tab(tab: ReportTab, report: &ContentReport) -> Self {
        Self::build(tab.columns(), tab.rows(report))
    }
}

#[component]
pub fn TabPanel(content: TabContent) -> impl IntoView {
    match content {
        TabContent::NoData => view! {
            <p class="text-muted">{NO_DATA_MESSAGE}</p>
        }
        .into_any(),
        TabContent::Table(table) => view! { <DataTable table=table /> }.into_any(),
    }
}

#[component]
pub fn DataTable(table: TableModel) -> impl IntoView {
    view! {
        <div class="table-responsive">
            <table class="table table-striped table-hover align-middle">
                <thead>
                    <tr>
                        {table
                            .headers
                            .into_iter()
                            .map(|header| view! { <th>{header}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {table
                        .rows
                        .into_iter()
                        .map(|cells| {
                            view! {
                                <tr>
                                    {cells
                                        .into_iter()
                                        .map(|cell| view! { <td>{cell}</td> })
                                        .collect_view()}
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
