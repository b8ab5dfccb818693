//! Check command implementation — show the effective configuration
//!
//! Resolves everything exactly as `run` would, prints it with secrets
//! redacted, and makes no network call.

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::BridgeConfig;

pub fn run_check(level: LogLevel) -> Result<(), String> {
    let config = BridgeConfig::from_env().map_err(|e| format!("Configuration: {e}"))?;

    let severities = config
        .sonar
        .severities
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(",");

    log(
        level,
        LogLevel::Normal,
        &format!(
            "SonarCloud: {} project {} (org {})",
            config.sonar.base_url, config.sonar.project_key, config.sonar.organization
        ),
    );
    log(
        level,
        LogLevel::Normal,
        &format!(
            "  severities {severities}; statuses {}; created after {}; page size {}",
            config.sonar.statuses.join(","),
            config.sonar.created_after,
            config.sonar.page_size
        ),
    );
    log(
        level,
        LogLevel::Normal,
        &format!(
            "GitHub: {}/{} (number prediction {})",
            config.tracker.owner,
            config.tracker.repo,
            if config.tracker.predict_numbers { "on" } else { "off" }
        ),
    );
    log(
        level,
        LogLevel::Normal,
        &format!(
            "Minimum severity: {}",
            config
                .min_severity
                .map_or_else(|| "none (keep everything)".to_string(), |s| s.to_string())
        ),
    );
    log(
        level,
        LogLevel::Normal,
        &format!(
            "Retries: {} attempt(s), {:?} request timeout",
            config.retry.max_attempts, config.timeout
        ),
    );
    log(level, LogLevel::Normal, "Tokens: SONAR_TOKEN set, PAT_TOKEN set");

    Ok(())
}
