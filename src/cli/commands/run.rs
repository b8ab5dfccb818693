//! Run command implementation — one fetch/filter/report pass

use crate::bridge;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::BridgeConfig;

/// Run a single bridge pass.
///
/// Missing credentials and client construction problems are the only
/// fatal errors; individual submission failures end up as counters in the
/// summary and the process still exits zero.
pub fn run_bridge(level: LogLevel) -> Result<(), String> {
    let config = BridgeConfig::from_env().map_err(|e| format!("Configuration: {e}"))?;

    let summary = bridge::run(&config, level).map_err(|e| format!("Bridge run: {e}"))?;

    log(level, LogLevel::Normal, &summary.to_string());
    Ok(())
}
