//! Estimate command and query handlers.

mod compute_estimate;
mod list_unit_types;

pub use compute_estimate::{ComputeEstimateCommand, ComputeEstimateHandler, ComputeEstimateResult};
pub use list_unit_types::{ListUnitTypesHandler, UnitTypeSummary};
