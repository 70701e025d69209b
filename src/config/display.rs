//! Output configuration

use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;

/// How estimates are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        };
        write!(f, "{}", s)
    }
}

/// Output configuration
#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct DisplayConfig {
    /// Output format (overridden by `--format`)
    #[serde(default)]
    pub format: OutputFormat,

    /// Print the explanation under each line item in text output
    #[serde(default)]
    pub show_descriptions: bool,
}
