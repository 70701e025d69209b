use clap::{Parser, Subcommand};
use std::path::PathBuf;

use adu_estimator::config::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "adu-estimator",
    version,
    about = "Estimate the cost of building an accessory dwelling unit"
)]
pub struct Cli {
    /// Output format (overrides configuration)
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Configuration file path (TOML, YAML, or JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print the explanation under each line item (text output)
    #[arg(long, global = true)]
    pub descriptions: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Walk through the guided estimate (default)
    Wizard {
        /// Stop after the first estimate instead of offering changes
        #[arg(long)]
        no_revise: bool,
    },

    /// Compute one estimate non-interactively
    Estimate {
        /// Unit type key (see `types`)
        #[arg(long = "type", value_name = "KEY")]
        unit_type: String,

        /// Include separate water and gas service
        #[arg(long)]
        utilities: bool,

        /// The site is on a hillside
        #[arg(long)]
        hillside: bool,
    },

    /// List the available unit types
    Types,
}

impl Cli {
    /// Get the command, defaulting to the wizard
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Wizard { no_revise: false })
    }
}
