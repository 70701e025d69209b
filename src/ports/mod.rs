//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ChoicePrompter` - Asks the user for wizard inputs
//! - `BreakdownRenderer` - Formats an estimate for display or export

mod breakdown_renderer;
mod choice_prompter;

pub use breakdown_renderer::{BreakdownRenderer, RenderError};
pub use choice_prompter::{ChoicePrompter, PromptError, Revision};
