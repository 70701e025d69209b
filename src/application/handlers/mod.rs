//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod estimate;
pub mod wizard;

pub use estimate::{
    ComputeEstimateCommand, ComputeEstimateHandler, ComputeEstimateResult, ListUnitTypesHandler,
    UnitTypeSummary,
};
pub use wizard::{RunWizardHandler, RunWizardResult};
