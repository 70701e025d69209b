use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::sync::Arc;

mod cli;

use adu_estimator::adapters::{renderer_for, TerminalPrompter};
use adu_estimator::application::{
    ComputeEstimateCommand, ComputeEstimateHandler, ListUnitTypesHandler, RunWizardHandler,
    UnitTypeSummary,
};
use adu_estimator::config::{AppConfig, OutputFormat};
use adu_estimator::init_tracing;
use adu_estimator::ports::BreakdownRenderer;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let mut config = AppConfig::load_with_file(args.config.as_deref())
        .context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    if let Some(format) = args.format {
        config.display.format = format;
    }
    if args.descriptions {
        config.display.show_descriptions = true;
    }

    init_tracing(&config.logging);
    tracing::debug!(format = %config.display.format, "Configuration loaded");

    let renderer = renderer_for(&config.display);

    match args.get_command() {
        cli::Commands::Wizard { no_revise } => {
            run_wizard(renderer, &config, !no_revise)?;
        }
        cli::Commands::Estimate {
            unit_type,
            utilities,
            hillside,
        } => {
            let result = ComputeEstimateHandler::new(renderer).handle(ComputeEstimateCommand {
                unit_type,
                include_utilities: utilities,
                on_hillside: hillside,
            })?;
            print!("{}", ensure_trailing_newline(result.rendered));
        }
        cli::Commands::Types => {
            let summaries = ListUnitTypesHandler::new().handle();
            print!("{}", render_types(&summaries, config.display.format)?);
        }
    }

    Ok(())
}

fn run_wizard(
    renderer: Arc<dyn BreakdownRenderer>,
    config: &AppConfig,
    allow_revisions: bool,
) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = TerminalPrompter::new(stdin.lock(), stdout.lock());

    let result = RunWizardHandler::new(renderer, config.wizard.defaults())
        .with_revisions(allow_revisions)
        .handle(&mut prompter)?;

    tracing::info!(
        unit_type = %result.estimate.unit_type,
        revisions = result.revisions,
        "Wizard finished"
    );
    prompter.into_output().flush()?;
    Ok(())
}

fn render_types(summaries: &[UnitTypeSummary], format: OutputFormat) -> Result<String> {
    let out = match format {
        OutputFormat::Json => serde_json::to_string_pretty(summaries)? + "\n",
        OutputFormat::Yaml => serde_yaml::to_string(summaries)?,
        OutputFormat::Text => {
            let mut out = String::new();
            for s in summaries {
                out.push_str(&format!(
                    "{:<16} {:<32} {:<20} {:>5} sq ft\n",
                    s.key.as_str(),
                    s.name,
                    s.construction.to_string(),
                    s.area
                ));
            }
            out
        }
    };
    Ok(out)
}

fn ensure_trailing_newline(mut s: String) -> String {
    if !s.ends_with('\n') {
        s.push('\n');
    }
    s
}
