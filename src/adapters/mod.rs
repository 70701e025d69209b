//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to the outside world:
//! - `terminal` - Interactive prompts over stdin/stdout
//! - `render` - Text, JSON, and YAML estimate renderers

pub mod render;
pub mod terminal;

pub use render::{renderer_for, JsonRenderer, TextTableRenderer, YamlRenderer};
pub use terminal::TerminalPrompter;
