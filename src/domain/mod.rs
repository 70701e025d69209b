//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors, dollars, state machine trait)
//! - `catalog` - The five unit types and shared cost constants
//! - `estimate` - Pure cost estimation producing an itemized breakdown
//! - `wizard` - Guided input collection as an explicit state machine

pub mod catalog;
pub mod estimate;
pub mod foundation;
pub mod wizard;
