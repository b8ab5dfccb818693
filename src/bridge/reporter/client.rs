//! GitHub HTTP client
//!
//! Creates issues via `POST /repos/{owner}/{repo}/issues` and reads the
//! most recent issue number for the prediction feature.

use std::time::Duration;

use serde::Deserialize;

use super::ticket::{CreatedTicket, Ticket};
use super::Tracker;
use crate::bridge::error::{BridgeError, Result};
use crate::config::TrackerConfig;

const USER_AGENT: &str = concat!("avisar/", env!("CARGO_PKG_VERSION"));
const ACCEPT: &str = "application/vnd.github.v3+json";

/// Blocking client for the GitHub issues API
pub struct GithubClient {
    config: TrackerConfig,
    client: reqwest::blocking::Client,
}

impl GithubClient {
    /// Build a client with a per-request timeout
    pub fn new(config: TrackerConfig, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| BridgeError::Http {
                operation: "ticket creation client".into(),
                message: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self { config, client })
    }

    fn issues_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/issues",
            self.config.api_url, self.config.owner, self.config.repo
        )
    }
}

impl Tracker for GithubClient {
    fn create_ticket(&self, ticket: &Ticket) -> Result<CreatedTicket> {
        let operation = "ticket creation";

        let response = self
            .client
            .post(self.issues_url())
            .header("Authorization", format!("token {}", self.config.token))
            .header("Accept", ACCEPT)
            .json(ticket)
            .send()
            .map_err(|e| BridgeError::Http {
                operation: operation.into(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BridgeError::Status {
                operation: operation.into(),
                status: status.as_u16(),
            });
        }

        // 2xx means the ticket exists; a surprising body just loses the
        // URL/number annotations.
        Ok(response.json::<CreatedTicket>().unwrap_or_default())
    }

    fn latest_ticket_number(&self) -> Result<Option<u64>> {
        let operation = "ticket number lookup";

        #[derive(Deserialize, Default)]
        #[serde(default)]
        struct IssueNumber {
            number: u64,
        }

        let response = self
            .client
            .get(self.issues_url())
            .query(&[
                ("state", "all"),
                ("sort", "created"),
                ("direction", "desc"),
                ("per_page", "1"),
            ])
            .header("Authorization", format!("token {}", self.config.token))
            .header("Accept", ACCEPT)
            .send()
            .map_err(|e| BridgeError::Http {
                operation: operation.into(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BridgeError::Status {
                operation: operation.into(),
                status: status.as_u16(),
            });
        }

        let issues = response.json::<Vec<IssueNumber>>().unwrap_or_default();
        Ok(issues.first().map(|i| i.number).filter(|&n| n > 0))
    }
}

impl std::fmt::Debug for GithubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubClient")
            .field("owner", &self.config.owner)
            .field("repo", &self.config.repo)
            .field("predict_numbers", &self.config.predict_numbers)
            .finish_non_exhaustive()
    }
}
