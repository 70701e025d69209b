//! Wizard module - the guided flow that collects estimator inputs.
//!
//! Intro -> unit type -> utilities -> hillside -> result, with
//! re-selection of any input from the result screen.

mod errors;
mod prompts;
mod state;
mod step;

pub use errors::WizardError;
pub use prompts::{BinaryPrompt, IntroScreen, TypePrompt, WizardDefaults, INTRO};
pub use state::WizardState;
pub use step::WizardStep;
