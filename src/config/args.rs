//! Core CLI types - Cli and Command

use clap::{Parser, Subcommand};

/// Avisar: SonarCloud → GitHub defect bridge
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "avisar")]
#[command(version)]
#[command(about = "Files GitHub issues for newly detected SonarCloud defects")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run one bridge pass: fetch defects, filter, file issues
    Run,

    /// Resolve and display the effective configuration without any network call
    Check,
}

/// Parse arguments from an explicit iterator (testable entry point)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
