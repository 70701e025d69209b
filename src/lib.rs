//! ADU Estimator - Cost estimates for accessory dwelling units
//!
//! This crate prices five ADU unit types from a fixed catalog, adjusted
//! for separate utility service and hillside sites, and drives a guided
//! wizard that collects those inputs and shows the resulting breakdown.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Initialize the global tracing subscriber
///
/// Logs go to stderr so rendered output on stdout stays machine-readable.
/// `RUST_LOG` overrides the configured filter.
pub fn init_tracing(config: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(config.env_filter());

    if config.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}
