//! ComputeEstimateHandler - One-shot estimate for an untrusted unit type key.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::catalog::Catalog;
use crate::domain::estimate::{EstimateCalculator, EstimateResult, SiteConditions};
use crate::domain::foundation::DomainError;
use crate::ports::BreakdownRenderer;

/// Command to compute an estimate.
#[derive(Debug, Clone)]
pub struct ComputeEstimateCommand {
    /// Catalog key as typed by the caller (e.g. `detached_1br`).
    pub unit_type: String,
    pub include_utilities: bool,
    pub on_hillside: bool,
}

/// Result of a successful estimate.
#[derive(Debug, Clone)]
pub struct ComputeEstimateResult {
    pub estimate: EstimateResult,
    pub rendered: String,
}

/// Handler for computing and rendering a single estimate.
pub struct ComputeEstimateHandler {
    renderer: Arc<dyn BreakdownRenderer>,
}

impl ComputeEstimateHandler {
    pub fn new(renderer: Arc<dyn BreakdownRenderer>) -> Self {
        Self { renderer }
    }

    /// # Errors
    ///
    /// Returns a `UNKNOWN_UNIT_TYPE` error when the key is not in the
    /// catalog; no partial estimate is produced.
    pub fn handle(&self, cmd: ComputeEstimateCommand) -> Result<ComputeEstimateResult, DomainError> {
        let unit = Catalog::lookup(&cmd.unit_type).map_err(|err| {
            warn!(unit_type = %cmd.unit_type, "Estimate requested for unknown unit type");
            DomainError::from(err)
        })?;

        let site = SiteConditions::new(cmd.include_utilities, cmd.on_hillside);
        let estimate = EstimateCalculator::estimate(unit, site);

        info!(
            unit_type = %unit.key,
            include_utilities = site.include_utilities,
            on_hillside = site.on_hillside,
            mid_total = estimate.mid_total(),
            format = self.renderer.format_name(),
            "Estimate computed"
        );

        let rendered = self.renderer.render(&estimate)?;
        Ok(ComputeEstimateResult { estimate, rendered })
    }
}
