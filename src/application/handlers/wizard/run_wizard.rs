//! RunWizardHandler - Drives the wizard state machine through a prompter.
//!
//! Collects the three inputs in order, shows the estimate, then lets the
//! user re-select any input until they are done. Every change recomputes
//! the estimate from scratch.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::catalog::Catalog;
use crate::domain::estimate::EstimateResult;
use crate::domain::foundation::DomainError;
use crate::domain::wizard::{WizardDefaults, WizardState, INTRO};
use crate::ports::{BreakdownRenderer, ChoicePrompter, Revision};

/// Result of a completed wizard session.
#[derive(Debug, Clone)]
pub struct RunWizardResult {
    /// Final state (always `ShowingResult`).
    pub state: WizardState,
    /// Estimate for the final inputs.
    pub estimate: EstimateResult,
    /// Number of inputs re-selected from the result screen.
    pub revisions: u32,
}

/// Handler for an interactive wizard session.
pub struct RunWizardHandler {
    renderer: Arc<dyn BreakdownRenderer>,
    defaults: WizardDefaults,
    allow_revisions: bool,
}

impl RunWizardHandler {
    pub fn new(renderer: Arc<dyn BreakdownRenderer>, defaults: WizardDefaults) -> Self {
        Self {
            renderer,
            defaults,
            allow_revisions: true,
        }
    }

    /// When disabled, the session ends as soon as the first estimate is shown.
    pub fn with_revisions(mut self, allow: bool) -> Self {
        self.allow_revisions = allow;
        self
    }

    pub fn handle(&self, prompter: &mut dyn ChoicePrompter) -> Result<RunWizardResult, DomainError> {
        let mut state = self.collect_inputs(prompter)?;
        let mut revisions = 0;

        loop {
            let estimate = state.estimate()?;
            info!(
                unit_type = %estimate.unit_type,
                include_utilities = estimate.site.include_utilities,
                on_hillside = estimate.site.on_hillside,
                mid_total = estimate.mid_total(),
                "Wizard estimate ready"
            );
            prompter.show_estimate(&self.renderer.render(&estimate)?)?;

            let revision = if self.allow_revisions {
                prompter.choose_revision()?
            } else {
                Revision::Done
            };

            state = match revision {
                Revision::Done => {
                    return Ok(RunWizardResult {
                        state,
                        estimate,
                        revisions,
                    })
                }
                Revision::UnitType => {
                    let prompt = self.defaults.type_prompt().with_default(estimate.unit_type);
                    let key = prompter.choose_unit_type(&prompt, &Catalog::list_types())?;
                    state.update_type(key)?
                }
                Revision::Utilities => {
                    let prompt = self
                        .defaults
                        .utilities_prompt()
                        .with_default(estimate.site.include_utilities);
                    state.update_utilities(prompter.choose_yes_no(&prompt)?)?
                }
                Revision::Hillside => {
                    let prompt = self
                        .defaults
                        .hillside_prompt()
                        .with_default(estimate.site.on_hillside);
                    state.update_hillside(prompter.choose_yes_no(&prompt)?)?
                }
            };

            revisions += 1;
            debug!(?revision, revisions, "Input re-selected");
        }
    }

    /// Walks the forward steps until every input is chosen.
    fn collect_inputs(&self, prompter: &mut dyn ChoicePrompter) -> Result<WizardState, DomainError> {
        let mut state = WizardState::new();

        loop {
            state = match state {
                WizardState::Intro => {
                    prompter.show_intro(&INTRO)?;
                    state.begin()?
                }
                WizardState::ChoosingType => {
                    let key = prompter
                        .choose_unit_type(&self.defaults.type_prompt(), &Catalog::list_types())?;
                    state.choose_type(key)?
                }
                WizardState::ChoosingUtilities { .. } => {
                    let answer = prompter.choose_yes_no(&self.defaults.utilities_prompt())?;
                    state.choose_utilities(answer)?
                }
                WizardState::ChoosingHillside { .. } => {
                    let answer = prompter.choose_yes_no(&self.defaults.hillside_prompt())?;
                    state.choose_hillside(answer)?
                }
                WizardState::ShowingResult { .. } => return Ok(state),
            };
            debug!(step = %state.step(), "Wizard advanced");
        }
    }
}
