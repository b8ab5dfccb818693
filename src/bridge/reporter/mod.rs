//! GitHub write side
//!
//! Builds one tracking ticket per retained defect and submits it to the
//! repository's issue endpoint, optionally annotating each ticket with a
//! predicted issue number reconciled against the numbers the tracker
//! actually assigns.
//!
//! # Example
//!
//! ```ignore
//! use avisar::bridge::reporter::{build_ticket, GithubClient, Tracker};
//!
//! let tracker = GithubClient::new(config.tracker.clone(), config.timeout)?;
//! let ticket = build_ticket(&defect, &config.sonar, None);
//! let created = tracker.create_ticket(&ticket)?;
//! ```

pub mod client;
pub mod numbering;
pub mod ticket;


pub use client::GithubClient;
pub use numbering::TicketNumbering;
pub use ticket::{build_ticket, truncate_message, CreatedTicket, Ticket};

use super::error::Result;

/// Ticket-creation surface of the issue tracker, abstracted over transport
pub trait Tracker {
    /// Submit one ticket; 2xx yields the created ticket's URL and number
    fn create_ticket(&self, ticket: &Ticket) -> Result<CreatedTicket>;

    /// Number of the most recently created ticket, if any exist
    fn latest_ticket_number(&self) -> Result<Option<u64>>;
}
