//! Environment-resolved bridge configuration
//!
//! Two secret tokens are mandatory and checked before any HTTP client is
//! built; everything else has a default. Resolution goes through a lookup
//! closure so tests never have to mutate process-global environment state.

use std::time::Duration;

use chrono::{Days, NaiveDate, Utc};

use crate::bridge::error::{BridgeError, Result};
use crate::bridge::retry::RetryPolicy;
use crate::bridge::severity::Severity;

/// Fixed defaults for everything the environment does not override
pub mod defaults {
    use crate::bridge::severity::Severity;

    pub const SONAR_URL: &str = "https://sonarcloud.io";
    pub const GITHUB_API_URL: &str = "https://api.github.com";
    pub const MIN_SEVERITY: Severity = Severity::Major;
    pub const LOOKBACK_DAYS: u32 = 1;
    pub const PAGE_SIZE: u32 = 100;
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Severity allow-list sent to the search endpoint
    pub const SEVERITIES: [Severity; 3] =
        [Severity::Blocker, Severity::Critical, Severity::Major];

    /// Status allow-list sent to the search endpoint
    pub const STATUSES: [&str; 2] = ["OPEN", "CONFIRMED"];
}

/// SonarCloud connection and query parameters
#[derive(Clone, Debug)]
pub struct SonarConfig {
    /// Web + API base, e.g. `https://sonarcloud.io`
    pub base_url: String,
    pub project_key: String,
    pub organization: String,
    pub token: String,
    /// Severity allow-list for the search request
    pub severities: Vec<Severity>,
    /// Status allow-list for the search request
    pub statuses: Vec<String>,
    /// Only defects created on or after this date are fetched
    pub created_after: NaiveDate,
    pub page_size: u32,
}

impl SonarConfig {
    /// Deep link to one defect in the SonarCloud UI
    #[must_use]
    pub fn issue_url(&self, key: &str) -> String {
        format!(
            "{}/project/issues?id={}&issues={key}&open={key}",
            self.base_url, self.project_key
        )
    }

    /// Deep link to a rule definition in the SonarCloud UI
    #[must_use]
    pub fn rule_url(&self, rule: &str) -> String {
        format!("{}/coding_rules?open={rule}&rule_key={rule}", self.base_url)
    }
}

/// GitHub connection parameters
#[derive(Clone, Debug)]
pub struct TrackerConfig {
    /// REST API base, e.g. `https://api.github.com`
    pub api_url: String,
    pub owner: String,
    pub repo: String,
    pub token: String,
    /// Whether to annotate tickets with a predicted issue number
    pub predict_numbers: bool,
}

/// Immutable configuration for one bridge run
#[derive(Clone, Debug)]
pub struct BridgeConfig {
    pub sonar: SonarConfig,
    pub tracker: TrackerConfig,
    /// Defects ranking below this are skipped; `None` keeps everything
    pub min_severity: Option<Severity>,
    pub retry: RetryPolicy,
    /// Per-request timeout for both services
    pub timeout: Duration,
}

impl BridgeConfig {
    /// Resolve configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Resolve configuration from an arbitrary variable lookup.
    ///
    /// Required: `SONAR_TOKEN`, `PAT_TOKEN`, `SONAR_PROJECT_KEY`,
    /// `SONAR_ORGANIZATION`, `GITHUB_REPOSITORY` (owner/name). Every
    /// missing name is reported in a single error so a misconfigured
    /// scheduler surfaces the whole problem at once.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mut missing = Vec::new();
        let mut require = |name: &str| match get(name) {
            Some(value) => value,
            None => {
                missing.push(name.to_string());
                String::new()
            }
        };

        let sonar_token = require("SONAR_TOKEN");
        let pat_token = require("PAT_TOKEN");
        let project_key = require("SONAR_PROJECT_KEY");
        let organization = require("SONAR_ORGANIZATION");
        let repository = require("GITHUB_REPOSITORY");

        if !missing.is_empty() {
            return Err(BridgeError::MissingEnv { vars: missing });
        }

        let (owner, repo) = repository.split_once('/').ok_or_else(|| {
            BridgeError::InvalidConfig {
                name: "GITHUB_REPOSITORY".into(),
                value: repository.clone(),
            }
        })?;

        let min_severity = match get("MIN_SEVERITY") {
            None => Some(defaults::MIN_SEVERITY),
            Some(v) if v.eq_ignore_ascii_case("none") => None,
            Some(v) => Some(v.parse::<Severity>().map_err(|()| {
                BridgeError::InvalidConfig { name: "MIN_SEVERITY".into(), value: v }
            })?),
        };

        let lookback_days = match get("LOOKBACK_DAYS") {
            None => defaults::LOOKBACK_DAYS,
            Some(v) => v.parse::<u32>().map_err(|_| BridgeError::InvalidConfig {
                name: "LOOKBACK_DAYS".into(),
                value: v,
            })?,
        };

        let predict_numbers = match get("PREDICT_NUMBERS") {
            None => true,
            Some(v) => !matches!(
                v.to_ascii_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            ),
        };

        let base_url = get("SONAR_URL")
            .unwrap_or_else(|| defaults::SONAR_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            sonar: SonarConfig {
                base_url,
                project_key,
                organization,
                token: sonar_token,
                severities: defaults::SEVERITIES.to_vec(),
                statuses: defaults::STATUSES.iter().map(ToString::to_string).collect(),
                created_after: lookback_date(Utc::now().date_naive(), lookback_days),
                page_size: defaults::PAGE_SIZE,
            },
            tracker: TrackerConfig {
                api_url: defaults::GITHUB_API_URL.to_string(),
                owner: owner.to_string(),
                repo: repo.to_string(),
                token: pat_token,
                predict_numbers,
            },
            min_severity,
            retry: RetryPolicy::default(),
            timeout: Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS),
        })
    }
}

/// First day of the lookback window: `today - days`
#[must_use]
pub fn lookback_date(today: NaiveDate, days: u32) -> NaiveDate {
    today.checked_sub_days(Days::new(u64::from(days))).unwrap_or(today)
}
