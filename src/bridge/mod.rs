//! The fetch → filter → report pipeline
//!
//! One invocation is one batch pass: collect every matching defect from
//! SonarCloud, drop the ones below the severity threshold, file a GitHub
//! issue for the rest, and tally a [`RunSummary`]. Individual submission
//! failures never abort the batch; only configuration and client
//! construction are fatal.

pub mod error;
pub mod fetcher;
pub mod reporter;
pub mod retry;
pub mod severity;

#[cfg(test)]
mod tests;

pub use error::{BridgeError, Result};
pub use retry::{with_retries, RetryPolicy};
pub use severity::Severity;

use fetcher::{fetch_all_defects, Defect, DefectSource, SonarClient};
use reporter::ticket::TITLE_MESSAGE_BUDGET;
use reporter::{build_ticket, truncate_message, GithubClient, TicketNumbering, Tracker};
use severity::meets_threshold;

use crate::cli::logging::{log, LogLevel};
use crate::config::BridgeConfig;

/// Terminal state of one defect within a run
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DefectOutcome {
    /// Below the severity threshold; no ticket attempted
    FilteredOut,
    /// Ticket created
    Submitted(reporter::CreatedTicket),
    /// Ticket creation exhausted its retries
    Failed,
}

/// Counters for one bridge pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Defects returned by the search, before filtering
    pub fetched: usize,
    /// Tickets created
    pub created: usize,
    /// Defects below the severity threshold
    pub skipped: usize,
    /// Submissions that failed after exhausting retries
    pub failed: usize,
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Fetched {} defect(s): {} ticket(s) created, {} skipped, {} failed",
            self.fetched, self.created, self.skipped, self.failed
        )
    }
}

/// Run one bridge pass with real SonarCloud and GitHub clients.
///
/// Errors only when a client cannot be constructed; everything past that
/// point degrades to counters in the summary.
pub fn run(config: &BridgeConfig, level: LogLevel) -> Result<RunSummary> {
    let source = SonarClient::new(config.sonar.clone(), config.timeout)?;
    let tracker = GithubClient::new(config.tracker.clone(), config.timeout)?;
    Ok(run_pass(&source, &tracker, config, level))
}

/// The pipeline itself, generic over both remote surfaces
pub fn run_pass(
    source: &impl DefectSource,
    tracker: &impl Tracker,
    config: &BridgeConfig,
    level: LogLevel,
) -> RunSummary {
    log(level, LogLevel::Normal, "Fetching defects from SonarCloud");
    let defects = fetch_all_defects(source, config.retry, level);
    log(
        level,
        LogLevel::Normal,
        &format!("Found {} defect(s)", defects.len()),
    );

    let mut numbering = if config.tracker.predict_numbers && !defects.is_empty() {
        // Best-effort seed; a failed lookup just disables the hints.
        with_retries(config.retry, "ticket number lookup", level, || {
            tracker.latest_ticket_number()
        })
        .map_or_else(|_| TicketNumbering::disabled(), TicketNumbering::from_latest)
    } else {
        TicketNumbering::disabled()
    };

    let mut summary = RunSummary { fetched: defects.len(), ..Default::default() };

    for defect in &defects {
        match process_defect(defect, tracker, config, &mut numbering, level) {
            DefectOutcome::FilteredOut => summary.skipped += 1,
            DefectOutcome::Submitted(_) => summary.created += 1,
            DefectOutcome::Failed => summary.failed += 1,
        }
    }

    summary
}

/// Drive one defect to its terminal outcome
fn process_defect(
    defect: &Defect,
    tracker: &impl Tracker,
    config: &BridgeConfig,
    numbering: &mut TicketNumbering,
    level: LogLevel,
) -> DefectOutcome {
    let headline = truncate_message(&defect.message, TITLE_MESSAGE_BUDGET);

    if !meets_threshold(&defect.severity, config.min_severity) {
        log(
            level,
            LogLevel::Verbose,
            &format!("Skipping (below severity threshold): {headline}"),
        );
        return DefectOutcome::FilteredOut;
    }

    let ticket = build_ticket(defect, &config.sonar, numbering.predicted());
    log(level, LogLevel::Normal, &format!("Filing ticket for: {headline}"));

    match with_retries(config.retry, "ticket creation", level, || {
        tracker.create_ticket(&ticket)
    }) {
        Ok(created) => {
            if !created.url.is_empty() {
                log(level, LogLevel::Normal, &format!("  Created {}", created.url));
            }
            if config.tracker.predict_numbers {
                numbering.reconcile(created.number);
            }
            DefectOutcome::Submitted(created)
        }
        Err(_) => DefectOutcome::Failed,
    }
}
