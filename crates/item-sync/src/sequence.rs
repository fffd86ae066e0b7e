//! Reload Sequencing
//!
//! Overlapping reloads (e.g. a delete and a create finishing close together)
//! may resolve out of order. The most recently issued reload wins.

use std::cell::Cell;

/// Issue order of a reload
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct ReloadTicket(u64);

#[derive(Debug, Default)]
pub(crate) struct ReloadSequencer {
    issued: Cell<u64>,
    applied: Cell<u64>,
}

impl ReloadSequencer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Take a ticket before sending the list request
    pub(crate) fn issue(&self) -> ReloadTicket {
        let next = self.issued.get() + 1;
        self.issued.set(next);
        ReloadTicket(next)
    }

    /// True once this or a later-issued reload has been applied
    pub(crate) fn is_stale(&self, ticket: ReloadTicket) -> bool {
        ticket.0 <= self.applied.get()
    }

    /// Returns true if the response for `ticket` should replace the list.
    /// False when a later-issued reload has already been applied.
    pub(crate) fn commit(&self, ticket: ReloadTicket) -> bool {
        if self.is_stale(ticket) {
            return false;
        }
        self.applied.set(ticket.0);
        true
    }
}
