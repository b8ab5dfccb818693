//! CLI command implementations

mod check;
mod run;


use crate::cli::LogLevel;
use crate::config::{Cli, Command};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let level = log_level_for(&cli);

    match cli.command {
        Command::Run => run::run_bridge(level),
        Command::Check => check::run_check(level),
    }
}

/// Map the global verbosity flags to an output level
fn log_level_for(cli: &Cli) -> LogLevel {
    if cli.quiet {
        LogLevel::Quiet
    } else if cli.verbose {
        LogLevel::Verbose
    } else {
        LogLevel::Normal
    }
}
