//! Machine-readable renderers.

use crate::domain::estimate::EstimateResult;
use crate::ports::{BreakdownRenderer, RenderError};

/// Renders the full estimate as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl BreakdownRenderer for JsonRenderer {
    fn render(&self, estimate: &EstimateResult) -> Result<String, RenderError> {
        serde_json::to_string_pretty(estimate).map_err(|e| RenderError::Serialization(e.to_string()))
    }

    fn format_name(&self) -> &'static str {
        "json"
    }
}

/// Renders the full estimate as YAML.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlRenderer;

impl BreakdownRenderer for YamlRenderer {
    fn render(&self, estimate: &EstimateResult) -> Result<String, RenderError> {
        serde_yaml::to_string(estimate).map_err(|e| RenderError::Serialization(e.to_string()))
    }

    fn format_name(&self) -> &'static str {
        "yaml"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::UnitTypeKey;
    use crate::domain::estimate::{EstimateCalculator, EstimateInput};
    use serde_json::Value;

    fn garage() -> EstimateResult {
        EstimateCalculator::estimate_input(&EstimateInput::new(
            UnitTypeKey::GarageStudio,
            false,
            false,
        ))
    }

    #[test]
    fn json_contains_every_line_item_including_hidden() {
        let json = JsonRenderer.render(&garage()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        let items = value["line_items"].as_array().unwrap();
        assert_eq!(items.len(), 7);
        assert_eq!(items[0]["kind"], "boundary_survey");
        assert_eq!(items[0]["visible"], false);
        assert_eq!(value["unit_type"], "garage_studio");
        assert_eq!(value["area"], 400.0);
    }

    #[test]
    fn json_parses_back_into_result() {
        let json = JsonRenderer.render(&garage()).unwrap();
        let parsed: EstimateResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.unit_name, "Garage conversion studio");
        assert_eq!(parsed.line_items.len(), 7);
    }

    #[test]
    fn yaml_lists_totals() {
        let yaml = YamlRenderer.render(&garage()).unwrap();
        assert!(yaml.contains("unit_type: garage_studio"));
        assert!(yaml.contains("totals:"));
        assert!(yaml.contains("cost_per_area:"));
    }

    #[test]
    fn format_names() {
        assert_eq!(JsonRenderer.format_name(), "json");
        assert_eq!(YamlRenderer.format_name(), "yaml");
    }
}
