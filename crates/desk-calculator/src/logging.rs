//! Tracing subscriber for the terminal host
//!
//! The terminal owns stdout and stderr while the UI runs, so events go to
//! the configured log file. Without a log file no subscriber is installed.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::CalculatorConfig;
use crate::core::{CalcError, CalcResult};

/// Environment variable overriding the configured filter directive
pub const LOG_ENV: &str = "DESK_CALC_LOG";

/// Builds the filter from `DESK_CALC_LOG`, falling back to the config
pub fn filter(config: &CalculatorConfig) -> CalcResult<EnvFilter> {
    let directive = std::env::var(LOG_ENV).unwrap_or_else(|_| config.log_filter.clone());
    EnvFilter::try_new(&directive)
        .map_err(|e| CalcError::config(format!("invalid log filter {directive:?}: {e}")))
}

/// Installs the global subscriber.
///
/// Returns `Ok(false)` when no log file is configured.
pub fn init(config: &CalculatorConfig) -> CalcResult<bool> {
    let Some(path) = &config.log_file else {
        return Ok(false);
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter(config)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| CalcError::Logging(e.to_string()))?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(true)
}
