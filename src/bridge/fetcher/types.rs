//! SonarCloud API response types
//!
//! Deserialization is deliberately lenient: every field defaults when the
//! service omits it or changes its shape, so a surprising payload degrades
//! to empty values instead of failing the run.

use serde::Deserialize;

use crate::bridge::severity::Severity;

/// One code-quality finding returned by the issue search
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Defect {
    pub key: String,
    pub rule: String,
    /// Raw severity string; rank it via [`Defect::severity`]
    pub severity: String,
    /// Scoped path, `"{project_key}:{file_path}"`
    pub component: String,
    pub line: Option<u32>,
    pub message: String,
    #[serde(rename = "type")]
    pub issue_type: String,
    pub status: String,
}

impl Defect {
    /// Parsed severity; `None` for values the scale does not know
    #[must_use]
    pub fn severity(&self) -> Option<Severity> {
        self.severity.parse().ok()
    }

    /// File path with the project-key scope stripped from the component
    #[must_use]
    pub fn file_path<'a>(&'a self, project_key: &str) -> &'a str {
        self.component
            .strip_prefix(project_key)
            .and_then(|rest| rest.strip_prefix(':'))
            .unwrap_or(&self.component)
    }
}

/// One page of the issue search: the total match count plus this page's rows
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchPage {
    pub total: u64,
    pub issues: Vec<Defect>,
}
