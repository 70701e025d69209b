//! WizardState - the data collected so far, tagged by step.
//!
//! Each forward transition adds exactly one piece of information and none
//! removes any, so the position of the wizard is never inferred from
//! missing values. Once every input is chosen, the `update_*` operations
//! re-select one input and stay on the result.

use serde::{Deserialize, Serialize};

use super::{WizardError, WizardStep};
use crate::domain::catalog::UnitTypeKey;
use crate::domain::estimate::{EstimateCalculator, EstimateInput, EstimateResult};
use crate::domain::foundation::StateMachine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum WizardState {
    #[default]
    Intro,
    ChoosingType,
    ChoosingUtilities {
        unit_type: UnitTypeKey,
    },
    ChoosingHillside {
        unit_type: UnitTypeKey,
        include_utilities: bool,
    },
    ShowingResult {
        input: EstimateInput,
    },
}

impl WizardState {
    /// Starts a new wizard at the intro screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the step tag of this state.
    pub fn step(&self) -> WizardStep {
        match self {
            WizardState::Intro => WizardStep::Intro,
            WizardState::ChoosingType => WizardStep::ChooseType,
            WizardState::ChoosingUtilities { .. } => WizardStep::ChooseUtilities,
            WizardState::ChoosingHillside { .. } => WizardStep::ChooseHillside,
            WizardState::ShowingResult { .. } => WizardStep::ShowResult,
        }
    }

    /// Returns the unit type once it has been chosen.
    pub fn unit_type(&self) -> Option<UnitTypeKey> {
        match self {
            WizardState::Intro | WizardState::ChoosingType => None,
            WizardState::ChoosingUtilities { unit_type }
            | WizardState::ChoosingHillside { unit_type, .. } => Some(*unit_type),
            WizardState::ShowingResult { input } => Some(input.unit_type),
        }
    }

    /// Returns the complete input once every choice has been made.
    pub fn input(&self) -> Option<EstimateInput> {
        match self {
            WizardState::ShowingResult { input } => Some(*input),
            _ => None,
        }
    }

    /// Computes the estimate for the collected input.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::Incomplete` before every input is chosen.
    pub fn estimate(&self) -> Result<EstimateResult, WizardError> {
        self.input()
            .map(|input| EstimateCalculator::estimate_input(&input))
            .ok_or(WizardError::Incomplete(self.step()))
    }

    /// Leaves the intro screen.
    pub fn begin(self) -> Result<Self, WizardError> {
        self.guard(WizardStep::ChooseType, "begin")?;
        Ok(WizardState::ChoosingType)
    }

    /// Records the unit type.
    pub fn choose_type(self, unit_type: UnitTypeKey) -> Result<Self, WizardError> {
        const ACTION: &str = "choose a unit type";
        self.guard(WizardStep::ChooseUtilities, ACTION)?;
        Ok(WizardState::ChoosingUtilities { unit_type })
    }

    /// Records whether separate utilities are included.
    pub fn choose_utilities(self, include_utilities: bool) -> Result<Self, WizardError> {
        const ACTION: &str = "choose utilities";
        self.guard(WizardStep::ChooseHillside, ACTION)?;
        match self {
            WizardState::ChoosingUtilities { unit_type } => Ok(WizardState::ChoosingHillside {
                unit_type,
                include_utilities,
            }),
            other => Err(other.rejected(ACTION)),
        }
    }

    /// Records the hillside condition, completing the input.
    pub fn choose_hillside(self, on_hillside: bool) -> Result<Self, WizardError> {
        const ACTION: &str = "choose hillside";
        self.guard(WizardStep::ShowResult, ACTION)?;
        match self {
            WizardState::ChoosingHillside {
                unit_type,
                include_utilities,
            } => Ok(WizardState::ShowingResult {
                input: EstimateInput::new(unit_type, include_utilities, on_hillside),
            }),
            other => Err(other.rejected(ACTION)),
        }
    }

    /// Re-selects the unit type on the result screen.
    pub fn update_type(self, unit_type: UnitTypeKey) -> Result<Self, WizardError> {
        self.revise("change the unit type", |input| EstimateInput {
            unit_type,
            ..input
        })
    }

    /// Re-selects the utilities choice on the result screen.
    pub fn update_utilities(self, include_utilities: bool) -> Result<Self, WizardError> {
        self.revise("change utilities", |mut input| {
            input.site.include_utilities = include_utilities;
            input
        })
    }

    /// Re-selects the hillside choice on the result screen.
    pub fn update_hillside(self, on_hillside: bool) -> Result<Self, WizardError> {
        self.revise("change hillside", |mut input| {
            input.site.on_hillside = on_hillside;
            input
        })
    }

    fn revise(
        self,
        action: &'static str,
        change: impl FnOnce(EstimateInput) -> EstimateInput,
    ) -> Result<Self, WizardError> {
        self.guard(WizardStep::ShowResult, action)?;
        match self {
            WizardState::ShowingResult { input } => Ok(WizardState::ShowingResult {
                input: change(input),
            }),
            other => Err(other.rejected(action)),
        }
    }

    fn guard(&self, target: WizardStep, action: &'static str) -> Result<(), WizardError> {
        self.step()
            .transition_to(target)
            .map(|_| ())
            .map_err(|_| self.rejected(action))
    }

    fn rejected(&self, action: &'static str) -> WizardError {
        WizardError::InvalidTransition {
            step: self.step(),
            action,
        }
    }
}
