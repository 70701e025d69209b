//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers take their ports as constructor arguments so adapters can be
//! swapped in tests.

pub mod handlers;

pub use handlers::{
    ComputeEstimateCommand, ComputeEstimateHandler, ComputeEstimateResult, ListUnitTypesHandler,
    RunWizardHandler, RunWizardResult, UnitTypeSummary,
};
