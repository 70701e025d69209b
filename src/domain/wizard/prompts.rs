//! Copy and defaults for each wizard screen.

use serde::Serialize;

use crate::domain::catalog::UnitTypeKey;

/// The opening screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntroScreen {
    pub headline: &'static str,
    pub action: &'static str,
}

pub const INTRO: IntroScreen = IntroScreen {
    headline: "Calculate the cost of building an accessory dwelling unit",
    action: "Begin",
};

/// The unit type picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypePrompt {
    pub prompt: &'static str,
    pub default: UnitTypeKey,
}

impl TypePrompt {
    pub fn standard() -> Self {
        Self {
            prompt: "What type of unit to build?",
            default: UnitTypeKey::GarageStudio,
        }
    }

    pub fn with_default(self, default: UnitTypeKey) -> Self {
        Self { default, ..self }
    }
}

/// A yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BinaryPrompt {
    pub prompt: &'static str,
    pub explanation: Option<&'static str>,
    pub default: bool,
}

impl BinaryPrompt {
    pub fn utilities() -> Self {
        Self {
            prompt: "Include separate water and gas?",
            explanation: Some(
                "If you plan to rent out your ADU, you may want the utilities on separate \
                 meters, so your tenant's utility bills will be separate from yours.",
            ),
            default: false,
        }
    }

    pub fn hillside() -> Self {
        Self {
            prompt: "Is home located on hillside?",
            explanation: Some(
                "Construction on slopes or hillside requires additional design and site prep \
                 work, like grading the surface or providing additional support for the \
                 structure.",
            ),
            default: false,
        }
    }

    pub fn with_default(self, default: bool) -> Self {
        Self { default, ..self }
    }
}

/// Defaults preselected on each picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WizardDefaults {
    pub unit_type: UnitTypeKey,
    pub include_utilities: bool,
    pub on_hillside: bool,
}

impl WizardDefaults {
    pub fn type_prompt(&self) -> TypePrompt {
        TypePrompt::standard().with_default(self.unit_type)
    }

    pub fn utilities_prompt(&self) -> BinaryPrompt {
        BinaryPrompt::utilities().with_default(self.include_utilities)
    }

    pub fn hillside_prompt(&self) -> BinaryPrompt {
        BinaryPrompt::hillside().with_default(self.on_hillside)
    }
}
