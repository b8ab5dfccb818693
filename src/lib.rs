//! Avisar: SonarCloud → GitHub defect bridge
//!
//! Periodically invoked (e.g. from cron or a CI schedule), `avisar` queries
//! SonarCloud's issue-search API for defects detected inside a lookback
//! window, drops everything below a configured minimum severity, and files
//! one GitHub issue per retained defect. Every HTTP operation is wrapped in
//! a bounded retry with exponential backoff; a run always completes with a
//! summary rather than aborting on individual failures.
//!
//! # Modules
//!
//! - `bridge`: the fetch → filter → report pipeline, its error and retry
//!   types, and the SonarCloud/GitHub clients.
//! - `cli`: command handlers and output-level control.
//! - `config`: CLI argument types and the immutable environment-resolved
//!   [`config::BridgeConfig`].
//!
//! # Example
//!
//! ```ignore
//! use avisar::bridge;
//! use avisar::cli::LogLevel;
//! use avisar::config::BridgeConfig;
//!
//! let config = BridgeConfig::from_env()?;
//! let summary = bridge::run(&config, LogLevel::Normal)?;
//! println!("{summary}");
//! ```

pub mod bridge;
pub mod cli;
pub mod config;
