//! Render adapters - Implementations of the BreakdownRenderer port.
//!
//! - `TextTableRenderer` - Summary sentence and aligned cost table
//! - `JsonRenderer` - Full estimate as pretty JSON
//! - `YamlRenderer` - Full estimate as YAML

mod serialized;
mod text_table;

pub use serialized::{JsonRenderer, YamlRenderer};
pub use text_table::TextTableRenderer;

use std::sync::Arc;

use crate::config::{DisplayConfig, OutputFormat};
use crate::ports::BreakdownRenderer;

/// Selects the renderer for the configured output format.
pub fn renderer_for(display: &DisplayConfig) -> Arc<dyn BreakdownRenderer> {
    match display.format {
        OutputFormat::Text => {
            Arc::new(TextTableRenderer::new().with_descriptions(display.show_descriptions))
        }
        OutputFormat::Json => Arc::new(JsonRenderer),
        OutputFormat::Yaml => Arc::new(YamlRenderer),
    }
}
