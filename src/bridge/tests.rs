//! Pipeline tests with counting fakes for both remote surfaces

use std::cell::{Cell, RefCell};
use std::time::Duration;

use chrono::NaiveDate;

use super::error::{BridgeError, Result};
use super::fetcher::{Defect, DefectSource, SearchPage};
use super::reporter::{CreatedTicket, Ticket, Tracker};
use super::retry::RetryPolicy;
use super::severity::Severity;
use super::{run_pass, RunSummary};
use crate::cli::logging::LogLevel;
use crate::config::{BridgeConfig, SonarConfig, TrackerConfig};

fn test_config() -> BridgeConfig {
    BridgeConfig {
        sonar: SonarConfig {
            base_url: "https://sonarcloud.io".into(),
            project_key: "acme_widgets".into(),
            organization: "acme".into(),
            token: "sonar-secret".into(),
            severities: vec![Severity::Blocker, Severity::Critical, Severity::Major],
            statuses: vec!["OPEN".into(), "CONFIRMED".into()],
            created_after: NaiveDate::from_ymd_opt(2026, 8, 29).unwrap(),
            page_size: 100,
        },
        tracker: TrackerConfig {
            api_url: "https://api.github.com".into(),
            owner: "acme".into(),
            repo: "widgets".into(),
            token: "github-secret".into(),
            predict_numbers: true,
        },
        min_severity: Some(Severity::Major),
        retry: RetryPolicy { max_attempts: 3, base_delay: Duration::ZERO },
        timeout: Duration::from_secs(30),
    }
}

fn defect(key: &str, severity: &str, message: &str) -> Defect {
    Defect {
        key: key.into(),
        rule: "rust:S100".into(),
        severity: severity.into(),
        component: "acme_widgets:src/lib.rs".into(),
        line: Some(3),
        message: message.into(),
        issue_type: "BUG".into(),
        status: "OPEN".into(),
    }
}

/// Single fixed page of defects, counting requests
struct FixedSource {
    defects: Vec<Defect>,
    requests: Cell<u32>,
}

impl FixedSource {
    fn new(defects: Vec<Defect>) -> Self {
        Self { defects, requests: Cell::new(0) }
    }
}

impl DefectSource for FixedSource {
    fn search_page(&self, _page: u32) -> Result<SearchPage> {
        self.requests.set(self.requests.get() + 1);
        Ok(SearchPage { total: self.defects.len() as u64, issues: self.defects.clone() })
    }

    fn page_size(&self) -> u32 {
        100
    }
}

/// Records every creation request; optionally fails specific titles
struct RecordingTracker {
    latest: Option<u64>,
    /// Numbers handed out in creation order
    assigned: RefCell<Vec<u64>>,
    created: RefCell<Vec<Ticket>>,
    fail_titles_containing: Option<String>,
    lookup_calls: Cell<u32>,
    create_calls: Cell<u32>,
}

impl RecordingTracker {
    fn new(latest: Option<u64>, assigned: Vec<u64>) -> Self {
        Self {
            latest,
            assigned: RefCell::new(assigned),
            created: RefCell::new(Vec::new()),
            fail_titles_containing: None,
            lookup_calls: Cell::new(0),
            create_calls: Cell::new(0),
        }
    }
}

impl Tracker for RecordingTracker {
    fn create_ticket(&self, ticket: &Ticket) -> Result<CreatedTicket> {
        self.create_calls.set(self.create_calls.get() + 1);
        if let Some(needle) = &self.fail_titles_containing {
            if ticket.title.contains(needle.as_str()) {
                return Err(BridgeError::Status {
                    operation: "ticket creation".into(),
                    status: 502,
                });
            }
        }
        let mut assigned = self.assigned.borrow_mut();
        let number = if assigned.is_empty() { 0 } else { assigned.remove(0) };
        self.created.borrow_mut().push(ticket.clone());
        Ok(CreatedTicket {
            url: format!("https://github.com/acme/widgets/issues/{number}"),
            number,
        })
    }

    fn latest_ticket_number(&self) -> Result<Option<u64>> {
        self.lookup_calls.set(self.lookup_calls.get() + 1);
        Ok(self.latest)
    }
}

#[test]
fn test_pass_files_one_ticket_per_kept_defect() {
    let source = FixedSource::new(vec![
        defect("AX-1", "BLOCKER", "null dereference"),
        defect("AX-2", "MINOR", "rename variable"),
        defect("AX-3", "MAJOR", "unclosed resource"),
        defect("AX-4", "INFO", "style nit"),
    ]);
    let tracker = RecordingTracker::new(Some(10), vec![11, 12]);

    let summary = run_pass(&source, &tracker, &test_config(), LogLevel::Quiet);

    assert_eq!(
        summary,
        RunSummary { fetched: 4, created: 2, skipped: 2, failed: 0 }
    );
    let created = tracker.created.borrow();
    assert_eq!(created.len(), 2);
    assert!(created[0].title.contains("null dereference"));
    assert!(created[1].title.contains("unclosed resource"));
}

#[test]
fn test_unknown_severity_is_skipped_under_a_threshold() {
    let source = FixedSource::new(vec![defect("AX-1", "SEVERE", "mystery")]);
    let tracker = RecordingTracker::new(None, vec![]);

    let summary = run_pass(&source, &tracker, &test_config(), LogLevel::Quiet);

    assert_eq!(summary.skipped, 1);
    assert_eq!(tracker.create_calls.get(), 0);
}

#[test]
fn test_unset_threshold_keeps_unknown_severity() {
    let source = FixedSource::new(vec![defect("AX-1", "SEVERE", "mystery")]);
    let tracker = RecordingTracker::new(None, vec![7]);
    let mut config = test_config();
    config.min_severity = None;

    let summary = run_pass(&source, &tracker, &config, LogLevel::Quiet);

    assert_eq!(summary.created, 1);
}

#[test]
fn test_failed_submission_does_not_abort_the_batch() {
    let source = FixedSource::new(vec![
        defect("AX-1", "MAJOR", "first"),
        defect("AX-2", "MAJOR", "poison"),
        defect("AX-3", "MAJOR", "third"),
    ]);
    let mut tracker = RecordingTracker::new(None, vec![1, 2]);
    tracker.fail_titles_containing = Some("poison".into());

    let summary = run_pass(&source, &tracker, &test_config(), LogLevel::Quiet);

    assert_eq!(
        summary,
        RunSummary { fetched: 3, created: 2, skipped: 0, failed: 1 }
    );
    // The poisoned submission burned its full retry budget.
    assert_eq!(tracker.create_calls.get(), 2 + 3);
}

#[test]
fn test_number_prediction_reconciles_against_actual() {
    let source = FixedSource::new(vec![
        defect("AX-1", "MAJOR", "first"),
        defect("AX-2", "MAJOR", "second"),
    ]);
    // Latest is 41 so the first prediction is 42; the tracker actually
    // assigns 45, so the second prediction must be 46.
    let tracker = RecordingTracker::new(Some(41), vec![45, 46]);

    let summary = run_pass(&source, &tracker, &test_config(), LogLevel::Quiet);

    assert_eq!(summary.created, 2);
    assert_eq!(tracker.lookup_calls.get(), 1);
    let created = tracker.created.borrow();
    assert!(created[0].body.contains("(predicted)**: #42"));
    assert!(created[1].body.contains("(predicted)**: #46"));
}

#[test]
fn test_prediction_disabled_skips_lookup_and_annotation() {
    let source = FixedSource::new(vec![defect("AX-1", "MAJOR", "first")]);
    let tracker = RecordingTracker::new(Some(41), vec![45]);
    let mut config = test_config();
    config.tracker.predict_numbers = false;

    let summary = run_pass(&source, &tracker, &config, LogLevel::Quiet);

    assert_eq!(summary.created, 1);
    assert_eq!(tracker.lookup_calls.get(), 0);
    assert!(!tracker.created.borrow()[0].body.contains("predicted"));
}

#[test]
fn test_failed_lookup_disables_hints_but_not_creation() {
    struct LookupFailing(RecordingTracker);
    impl Tracker for LookupFailing {
        fn create_ticket(&self, ticket: &Ticket) -> Result<CreatedTicket> {
            self.0.create_ticket(ticket)
        }
        fn latest_ticket_number(&self) -> Result<Option<u64>> {
            self.0.lookup_calls.set(self.0.lookup_calls.get() + 1);
            Err(BridgeError::Status {
                operation: "ticket number lookup".into(),
                status: 500,
            })
        }
    }

    let source = FixedSource::new(vec![defect("AX-1", "MAJOR", "first")]);
    let tracker = LookupFailing(RecordingTracker::new(None, vec![9]));

    let summary = run_pass(&source, &tracker, &test_config(), LogLevel::Quiet);

    assert_eq!(summary.created, 1);
    // Lookup retried to the cap, then hints were simply dropped.
    assert_eq!(tracker.0.lookup_calls.get(), 3);
    assert!(!tracker.0.created.borrow()[0].body.contains("predicted"));
}

#[test]
fn test_empty_fetch_makes_no_tracker_calls() {
    let source = FixedSource::new(vec![]);
    let tracker = RecordingTracker::new(Some(41), vec![]);

    let summary = run_pass(&source, &tracker, &test_config(), LogLevel::Quiet);

    assert_eq!(summary, RunSummary::default());
    assert_eq!(tracker.lookup_calls.get(), 0);
    assert_eq!(tracker.create_calls.get(), 0);
}

#[test]
fn test_summary_display_counts() {
    let summary = RunSummary { fetched: 4, created: 2, skipped: 1, failed: 1 };
    assert_eq!(
        summary.to_string(),
        "Fetched 4 defect(s): 2 ticket(s) created, 1 skipped, 1 failed"
    );
}
