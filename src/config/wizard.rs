//! Wizard defaults configuration

use serde::Deserialize;

use crate::domain::catalog::UnitTypeKey;
use crate::domain::wizard::WizardDefaults;

/// Preselected answers for each wizard picker
#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct WizardConfig {
    /// Unit type highlighted on the type picker
    #[serde(default)]
    pub default_unit_type: UnitTypeKey,

    /// Default answer to "Include separate water and gas?"
    #[serde(default)]
    pub default_include_utilities: bool,

    /// Default answer to "Is home located on hillside?"
    #[serde(default)]
    pub default_on_hillside: bool,
}

impl WizardConfig {
    pub fn defaults(&self) -> WizardDefaults {
        WizardDefaults {
            unit_type: self.default_unit_type,
            include_utilities: self.default_include_utilities,
            on_hillside: self.default_on_hillside,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wizard_config_defaults() {
        let config = WizardConfig::default();
        assert_eq!(config.defaults(), WizardDefaults::default());
    }

    #[test]
    fn test_wizard_config_deserialization() {
        let json = r#"{
            "default_unit_type": "detached_1br",
            "default_on_hillside": true
        }"#;

        let config: WizardConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.default_unit_type, UnitTypeKey::Detached1Br);
        assert!(!config.default_include_utilities);
        assert!(config.default_on_hillside);
    }

    #[test]
    fn test_unknown_unit_type_rejected() {
        let json = r#"{ "default_unit_type": "castle" }"#;
        assert!(serde_json::from_str::<WizardConfig>(json).is_err());
    }
}
