mod summary_card;
mod tab_panel;

pub use summary_card::{summary_fields, SummaryCard, SummaryField};
pub use tab_panel::{DataTable, TabContent, TabPanel, TableModel, NO_DATA_MESSAGE};
