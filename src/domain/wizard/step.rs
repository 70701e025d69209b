//! WizardStep enum - the tag of a wizard state.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Position of the wizard, without the data collected so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Intro,
    ChooseType,
    ChooseUtilities,
    ChooseHillside,
    ShowResult,
}

impl WizardStep {
    /// Returns true once every input has been collected.
    pub fn is_complete(&self) -> bool {
        matches!(self, WizardStep::ShowResult)
    }
}

impl StateMachine for WizardStep {
    /// Valid transitions:
    /// - Intro -> ChooseType -> ChooseUtilities -> ChooseHillside -> ShowResult
    /// - ShowResult -> ShowResult (re-selecting an input on the result screen)
    fn can_transition_to(&self, target: &Self) -> bool {
        use WizardStep::*;
        matches!(
            (self, target),
            (Intro, ChooseType)
                | (ChooseType, ChooseUtilities)
                | (ChooseUtilities, ChooseHillside)
                | (ChooseHillside, ShowResult)
                | (ShowResult, ShowResult)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use WizardStep::*;
        match self {
            Intro => vec![ChooseType],
            ChooseType => vec![ChooseUtilities],
            ChooseUtilities => vec![ChooseHillside],
            ChooseHillside => vec![ShowResult],
            ShowResult => vec![ShowResult],
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WizardStep::Intro => "Intro",
            WizardStep::ChooseType => "Choose type",
            WizardStep::ChooseUtilities => "Choose utilities",
            WizardStep::ChooseHillside => "Choose hillside",
            WizardStep::ShowResult => "Show result",
        };
        write!(f, "{}", s)
    }
}
