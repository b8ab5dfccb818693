//! SonarCloud read side
//!
//! Paginates the issue-search endpoint and aggregates every matching
//! defect. Pagination is generic over [`DefectSource`] so the loop and its
//! retry behavior are testable without a network.
//!
//! # Example
//!
//! ```ignore
//! use avisar::bridge::fetcher::{fetch_all_defects, SonarClient};
//!
//! let client = SonarClient::new(config.sonar.clone(), config.timeout)?;
//! let defects = fetch_all_defects(&client, config.retry, level);
//! ```

pub mod client;
pub mod types;


pub use client::SonarClient;
pub use types::{Defect, SearchPage};

use super::error::Result;
use super::retry::{with_retries, RetryPolicy};
use crate::cli::logging::{warn, LogLevel};

/// One page of the defect search, abstracted over the transport
pub trait DefectSource {
    /// Fetch one page of matching defects (pages are 1-based)
    fn search_page(&self, page: u32) -> Result<SearchPage>;

    /// Page size the source requests; bounds the pagination loop
    fn page_size(&self) -> u32;
}

/// Collect the complete ordered defect sequence across all result pages.
///
/// Continues while `page * page_size < total` as reported by the service.
/// Each page request runs under the retry policy; exhausting retries stops
/// pagination and returns whatever was collected so far. Defects seen in a
/// previous run are re-delivered; callers must tolerate duplicates.
pub fn fetch_all_defects(
    source: &impl DefectSource,
    retry: RetryPolicy,
    level: LogLevel,
) -> Vec<Defect> {
    let mut defects = Vec::new();
    let page_size = source.page_size().max(1);
    let mut page = 1u32;

    loop {
        let fetched =
            match with_retries(retry, "issue search", level, || source.search_page(page)) {
                Ok(fetched) => fetched,
                Err(_) => {
                    warn(
                        level,
                        &format!(
                            "issue search: stopping at page {page}, keeping {} defect(s) already collected",
                            defects.len()
                        ),
                    );
                    break;
                }
            };

        let total = fetched.total;
        defects.extend(fetched.issues);

        if u64::from(page) * u64::from(page_size) >= total {
            break;
        }
        page += 1;
    }

    defects
}
