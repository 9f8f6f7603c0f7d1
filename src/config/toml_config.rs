use crate::core::chain::ReportChain;
use crate::core::{DeliveryBackend, LayerSpec, SourceKind};
use crate::utils::error::{CourierError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

// Sales report wrapped step by step, then one order through each backend.
const DEMO_CONFIG: &str = r#"
[report]
source = "sales"
print_steps = true

[[report.layers]]
kind = "date_range"
start = "2023-01-01"
end = "2023-12-31"

[[report.layers]]
kind = "sort"
key = "Date"

[[report.layers]]
kind = "csv"

[[report.layers]]
kind = "pdf"

[[deliveries]]
service = "Internal"
order_id = "1001"

[[deliveries]]
service = "ExternalA"
order_id = "2001"

[[deliveries]]
service = "ExternalB"
order_id = "Package001"
"#;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourierConfig {
    pub report: Option<ReportSection>,
    #[serde(default)]
    pub deliveries: Vec<DeliveryJob>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSection {
    pub source: SourceKind,
    /// Innermost first.
    #[serde(default)]
    pub layers: Vec<LayerSpec>,
    /// Print the output after every composition step, not just the final one.
    #[serde(default)]
    pub print_steps: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryJob {
    pub service: String,
    pub order_id: String,
}

impl CourierConfig {
    /// Loads and parses a TOML file; `${VAR}` placeholders are substituted first.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Built-in walkthrough used by the `demo` command.
    pub fn demo() -> Result<Self> {
        Self::from_toml_str(DEMO_CONFIG)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CourierError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
        let re = PLACEHOLDER
            .get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn report_chain(&self) -> Option<ReportChain> {
        self.report
            .as_ref()
            .map(|section| ReportChain::with_layers(section.source, section.layers.clone()))
    }
}

impl Validate for CourierConfig {
    fn validate(&self) -> Result<()> {
        if let Some(report) = &self.report {
            report.validate()?;
        }
        for job in &self.deliveries {
            job.validate()?;
        }
        Ok(())
    }
}

impl Validate for ReportSection {
    fn validate(&self) -> Result<()> {
        for layer in &self.layers {
            layer.validate()?;
        }
        Ok(())
    }
}

impl Validate for DeliveryJob {
    fn validate(&self) -> Result<()> {
        self.service.parse::<DeliveryBackend>()?;
        validate_non_empty_string("deliveries.order_id", &self.order_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[report]
source = "sales"
print_steps = true

[[report.layers]]
kind = "date_range"
start = "2023-01-01"
end = "2023-12-31"

[[report.layers]]
kind = "sort"
key = "Date"

[[report.layers]]
kind = "csv"

[[deliveries]]
service = "Internal"
order_id = "1001"
"#;

    #[test]
    fn test_parse_sample() {
        let config = CourierConfig::from_toml_str(SAMPLE).unwrap();
        let report = config.report.as_ref().unwrap();
        assert_eq!(report.source, SourceKind::Sales);
        assert_eq!(report.layers.len(), 3);
        assert!(report.print_steps);
        assert_eq!(config.deliveries.len(), 1);
        assert!(config.validate().is_ok());
        assert_eq!(config.report_chain().unwrap().depth(), 3);
    }

    #[test]
    fn test_demo_config_keeps_every_layer() {
        let config = CourierConfig::demo().unwrap();
        assert!(config.validate().is_ok());

        let chain = config.report_chain().unwrap();
        assert_eq!(chain.depth(), 4);
        assert!(matches!(chain.layers()[0], LayerSpec::DateRange { .. }));
        assert!(chain
            .generate()
            .contains("Filtered by date: 01.01.2023 to 31.12.2023"));
        assert_eq!(config.deliveries.len(), 3);
    }

    #[test]
    fn test_deliveries_only() {
        let config = CourierConfig::from_toml_str(
            r#"
[[deliveries]]
service = "ExternalB"
order_id = "Package001"
"#,
        )
        .unwrap();
        assert!(config.report.is_none());
        assert!(config.report_chain().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_source_is_case_insensitive() {
        let config = CourierConfig::from_toml_str(
            r#"
[report]
source = "Sales"
"#,
        )
        .unwrap();
        assert_eq!(config.report.unwrap().source, SourceKind::Sales);
    }

    #[test]
    fn test_unknown_layer_kind_fails_to_parse() {
        let result = CourierConfig::from_toml_str(
            r#"
[report]
source = "user"

[[report.layers]]
kind = "xlsx"
"#,
        );
        assert!(matches!(result, Err(CourierError::ConfigParseError { .. })));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let inverted = CourierConfig::from_toml_str(
            r#"
[report]
source = "sales"

[[report.layers]]
kind = "date_range"
start = "2023-12-31"
end = "2023-01-01"
"#,
        )
        .unwrap();
        assert!(inverted.validate().is_err());

        let blank_key = CourierConfig::from_toml_str(
            r#"
[report]
source = "sales"

[[report.layers]]
kind = "sort"
key = "  "
"#,
        )
        .unwrap();
        assert!(blank_key.validate().is_err());

        let bad_service = CourierConfig::from_toml_str(
            r#"
[[deliveries]]
service = "Pigeon"
order_id = "1"
"#,
        )
        .unwrap();
        assert!(matches!(
            bad_service.validate(),
            Err(CourierError::Delivery(_))
        ));
    }

    #[test]
    fn test_unset_placeholder_is_kept() {
        let substituted =
            CourierConfig::substitute_env_vars("key = \"${REPORT_COURIER_SURELY_UNSET_VAR}\"");
        assert_eq!(substituted, "key = \"${REPORT_COURIER_SURELY_UNSET_VAR}\"");
    }
}
