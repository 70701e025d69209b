//! Wizard error types.

use thiserror::Error;

use super::WizardStep;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised by wizard transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Cannot {action} while at step '{step}'")]
    InvalidTransition {
        step: WizardStep,
        action: &'static str,
    },

    #[error("No estimate available before all inputs are chosen (at step '{0}')")]
    Incomplete(WizardStep),
}

impl From<WizardError> for DomainError {
    fn from(err: WizardError) -> Self {
        let code = match err {
            WizardError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            WizardError::Incomplete(_) => ErrorCode::IncompleteInput,
        };
        DomainError::new(code, err.to_string())
    }
}
