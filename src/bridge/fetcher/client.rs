//! SonarCloud HTTP client
//!
//! Issues GET requests against `/api/issues/search` with the fixed filter
//! criteria from [`SonarConfig`] plus the page cursor.

use std::time::Duration;

use super::types::SearchPage;
use super::DefectSource;
use crate::bridge::error::{BridgeError, Result};
use crate::config::SonarConfig;

const USER_AGENT: &str = concat!("avisar/", env!("CARGO_PKG_VERSION"));

/// Blocking client for the SonarCloud issue-search endpoint
pub struct SonarClient {
    config: SonarConfig,
    client: reqwest::blocking::Client,
}

impl SonarClient {
    /// Build a client with a per-request timeout
    pub fn new(config: SonarConfig, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| BridgeError::Http {
                operation: "issue search client".into(),
                message: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self { config, client })
    }
}

impl DefectSource for SonarClient {
    fn search_page(&self, page: u32) -> Result<SearchPage> {
        let operation = "issue search";
        let url = format!("{}/api/issues/search", self.config.base_url);

        let severities = self
            .config
            .severities
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let statuses = self.config.statuses.join(",");
        let created_after = self.config.created_after.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("componentKeys", self.config.project_key.as_str()),
                ("organization", self.config.organization.as_str()),
                ("resolved", "false"),
                ("severities", severities.as_str()),
                ("statuses", statuses.as_str()),
                ("createdAfter", created_after.as_str()),
                ("p", page.to_string().as_str()),
                ("ps", self.config.page_size.to_string().as_str()),
            ])
            .bearer_auth(&self.config.token)
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

        response.json::<SearchPage>().map_err(|e| BridgeError::Decode {
            operation: operation.into(),
            message: e.to_string(),
        })
    }

    fn page_size(&self) -> u32 {
        self.config.page_size
    }
}

impl std::fmt::Debug for SonarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SonarClient")
            .field("base_url", &self.config.base_url)
            .field("project_key", &self.config.project_key)
            .finish_non_exhaustive()
    }
}
