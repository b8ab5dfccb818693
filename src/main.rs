//! Avisar CLI
//!
//! One-shot bridge between SonarCloud and GitHub: fetch newly detected
//! code-quality defects and file one tracking issue per defect.
//!
//! # Usage
//!
//! ```bash
//! # Run a single bridge pass (configuration comes from the environment)
//! SONAR_TOKEN=... PAT_TOKEN=... avisar run
//!
//! # Show the effective configuration without touching the network
//! avisar check
//! ```

use avisar::cli::{run_command, Cli};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
