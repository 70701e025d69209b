//! Wizard session handler.

mod run_wizard;

pub use run_wizard::{RunWizardHandler, RunWizardResult};
