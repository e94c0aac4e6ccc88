use crate::dashboards::d400_content_report::ReportTab;
use crate::shared::dom::PageError;
use contracts::dashboards::d400_content_report::{EXPORT_ENDPOINT, JSON_ENDPOINT};
use serde::Deserialize;
use web_sys::Document;

/// Id of an optional `<script type="application/toml">` block carrying
/// page-specific overrides
pub const CONFIG_ELEMENT_ID: &str = "relatorio-config";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub endpoints: Endpoints,
    pub elements: ElementIds,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub report_json: String,
    pub export: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            report_json: JSON_ENDPOINT.to_string(),
            export: EXPORT_ENDPOINT.to_string(),
        }
    }
}

/// DOM ids the report page is bound to
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub form: String,
    pub loading: String,
    pub export_button: String,
    pub summary: String,
    pub teacher: String,
    pub student: String,
    pub content: String,
    pub monthly: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            form: "relatorio-form".to_string(),
            loading: "loading".to_string(),
            export_button: "export-btn".to_string(),
            summary: "resumo-content".to_string(),
            teacher: "professor-content".to_string(),
            student: "aluno-content".to_string(),
            content: "conteudo-content".to_string(),
            monthly: "mensal-content".to_string(),
        }
    }
}

impl ElementIds {
    pub fn tab_container(&self, tab: ReportTab) -> &str {
        match tab {
            ReportTab::Teacher => &self.teacher,
            ReportTab::Student => &self.student,
            ReportTab::Content => &self.content,
            ReportTab::Monthly => &self.monthly,
        }
    }
}

impl PageConfig {
    /// Load configuration for the report page
    ///
    /// Search order:
    /// 1. `#relatorio-config` block embedded in the page
    /// 2. Falls back to built-in defaults
    pub fn load(document: &Document) -> Result<Self, PageError> {
        match document.get_element_by_id(CONFIG_ELEMENT_ID) {
            Some(element) => {
                log::info!("Loading report config from #{}", CONFIG_ELEMENT_ID);
                Self::from_toml(&element.text_content().unwrap_or_default())
            }
            None => {
                log::debug!("Using default report configuration");
                Ok(Self::default())
            }
        }
    }

    /// Parse a TOML document; keys it leaves out keep their defaults
    pub fn from_toml(contents: &str) -> Result<Self, PageError> {
        toml::from_str(contents).map_err(|e| PageError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = PageConfig::from_toml("").unwrap();
        assert_eq!(config, PageConfig::default());
        assert_eq!(config.endpoints.report_json, "/relatorios/conteudos/json/");
        assert_eq!(config.endpoints.export, "/relatorios/conteudos/export/");
        assert_eq!(config.elements.form, "relatorio-form");
        assert_eq!(config.elements.export_button, "export-btn");
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = PageConfig::from_toml(
            r#"
            [endpoints]
            report_json = "/escola/relatorios/json/"

            [elements]
            loading = "spinner"
            "#,
        )
        .unwrap();

        assert_eq!(config.endpoints.report_json, "/escola/relatorios/json/");
        assert_eq!(config.endpoints.export, "/relatorios/conteudos/export/");
        assert_eq!(config.elements.loading, "spinner");
        assert_eq!(config.elements.summary, "resumo-content");
    }

    #[test]
    fn test_tab_containers() {
        let ids = ElementIds::default();
        assert_eq!(ids.tab_container(ReportTab::Teacher), "professor-content");
        assert_eq!(ids.tab_container(ReportTab::Student), "aluno-content");
        assert_eq!(ids.tab_container(ReportTab::Content), "conteudo-content");
        assert_eq!(ids.tab_container(ReportTab::Monthly), "mensal-content");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = PageConfig::from_toml("[endpoints\nexport = 1").unwrap_err();
        assert!(matches!(err, PageError::Config(_)));
    }
}
