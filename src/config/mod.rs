//! CLI argument parsing and run configuration
//!
//! The bridge itself takes no behavioral flags: everything that decides
//! what gets fetched and filed is resolved once from the environment into
//! an immutable [`BridgeConfig`] and passed by reference into each
//! component.

mod args;
mod settings;

pub use args::{parse_args, Cli, Command};
pub use settings::{
    defaults, lookback_date, BridgeConfig, SonarConfig, TrackerConfig,
};
