//! Breakdown Renderer Port - presenting an estimate.
//!
//! The estimator produces structured data; renderers turn it into text
//! for a terminal, or into a serialized document for other programs.

use thiserror::Error;

use crate::domain::estimate::EstimateResult;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Port for formatting an `EstimateResult`.
///
/// # Contract
///
/// Implementations must:
/// - Include only visible line items when producing human-readable output
/// - Round amounts for display only, never the underlying figures
pub trait BreakdownRenderer: Send + Sync {
    /// Renders the estimate.
    fn render(&self, estimate: &EstimateResult) -> Result<String, RenderError>;

    /// Short name of the output format (for logs).
    fn format_name(&self) -> &'static str;
}

/// Errors that can occur during rendering.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<RenderError> for DomainError {
    fn from(err: RenderError) -> Self {
        DomainError::new(ErrorCode::RenderFailed, err.to_string())
    }
}
