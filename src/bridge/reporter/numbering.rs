//! Best-effort ticket number prediction
//!
//! The tracker owns numbering; this type only carries a hint. A predicted
//! number and the number the tracker actually assigned are kept separate:
//! every confirmed creation re-anchors the next prediction at
//! `actual + 1`, so drift (e.g. pull requests sharing the counter) heals
//! after one submission.

/// Predictor for the tracker's next ticket number
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TicketNumbering {
    next: Option<u64>,
}

impl TicketNumbering {
    /// Seed from the most recently created ticket's number
    #[must_use]
    pub fn from_latest(latest: Option<u64>) -> Self {
        Self { next: latest.map(|n| n.saturating_add(1)) }
    }

    /// Predictor that never offers a hint
    #[must_use]
    pub fn disabled() -> Self {
        Self { next: None }
    }

    /// Hint for the next ticket, if one is available
    #[must_use]
    pub fn predicted(&self) -> Option<u64> {
        self.next
    }

    /// Re-anchor on the number the tracker actually assigned.
    ///
    /// A zero `actual` means the creation response did not carry a usable
    /// number; the current hint is kept as-is.
    pub fn reconcile(&mut self, actual: u64) {
        if actual > 0 {
            self.next = Some(actual.saturating_add(1));
        }
    }
}
