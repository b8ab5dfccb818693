//! Ticket construction
//!
//! A [`Ticket`] is built from one defect and discarded after submission.
//! The title carries severity and type tags plus the message truncated to
//! a fixed budget; the body is markdown with deep links back to the
//! SonarCloud issue and rule pages.

use serde::{Deserialize, Serialize};

use crate::bridge::fetcher::Defect;
use crate::config::SonarConfig;

/// Character budget for the message portion of a ticket title
pub const TITLE_MESSAGE_BUDGET: usize = 80;

/// Marker appended when a title message was cut
pub const TRUNCATION_MARKER: &str = "...";

/// A tracker issue to be created; write-once
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Ticket {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

/// The tracker's answer to a creation request, parsed leniently
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CreatedTicket {
    #[serde(rename = "html_url")]
    pub url: String,
    pub number: u64,
}

/// Truncate `message` to `budget` characters, marking the cut
#[must_use]
pub fn truncate_message(message: &str, budget: usize) -> String {
    if message.chars().count() <= budget {
        message.to_string()
    } else {
        let cut: String = message.chars().take(budget).collect();
        format!("{cut}{TRUNCATION_MARKER}")
    }
}

/// Build the ticket for one defect.
///
/// `predicted` is a best-effort hint for the number the tracker will
/// assign; when present it is embedded in the body, never relied upon.
#[must_use]
pub fn build_ticket(defect: &Defect, sonar: &SonarConfig, predicted: Option<u64>) -> Ticket {
    let title = format!(
        "[{}] {}: {}",
        defect.severity,
        defect.issue_type,
        truncate_message(&defect.message, TITLE_MESSAGE_BUDGET)
    );

    let line = defect
        .line
        .map_or_else(|| "Unknown".to_string(), |l| l.to_string());
    let predicted_line = predicted
        .map(|n| format!("- **Tracking number (predicted)**: #{n}\n"))
        .unwrap_or_default();

    let body = format!(
        "## SonarCloud Issue: {key}\n\
         \n\
         ### Details\n\
         - **Rule**: {rule}\n\
         - **Severity**: {severity}\n\
         - **Type**: {issue_type}\n\
         - **File**: `{file}`\n\
         - **Line**: {line}\n\
         {predicted_line}\
         \n\
         ### Message\n\
         {message}\n\
         \n\
         ### Links\n\
         - [View in SonarCloud]({issue_url})\n\
         - [SonarCloud Rule Definition]({rule_url})\n",
        key = defect.key,
        rule = defect.rule,
        severity = defect.severity,
        issue_type = defect.issue_type,
        file = defect.file_path(&sonar.project_key),
        message = defect.message,
        issue_url = sonar.issue_url(&defect.key),
        rule_url = sonar.rule_url(&defect.rule),
    );

    let labels = vec![
        "sonarcloud".to_string(),
        format!("severity:{}", defect.severity.to_lowercase()),
        format!("type:{}", defect.issue_type.to_lowercase()),
    ];

    Ticket { title, body, labels }
}
