//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, error types, and the state machine trait
//! that form the vocabulary of the estimator domain.

mod dollars;
mod errors;
mod state_machine;

pub use dollars::Dollars;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use state_machine::StateMachine;
