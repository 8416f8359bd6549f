use serde::Serialize;

use crate::{AuditLogEntry, Contact, ContactStatus};

/// Contact counts per handling state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContactStatusCounts {
    /// Untouched requests.
    pub new: usize,
    /// Requests being handled.
    pub processing: usize,
    /// Answered requests.
    pub replied: usize,
    /// Closed requests.
    pub closed: usize,
}

impl ContactStatusCounts {
    /// Tallies contacts by status.
    #[must_use]
    pub fn from_contacts(contacts: &[Contact]) -> Self {
        contacts.iter().fold(Self::default(), |mut counts, contact| {
            match contact.status {
                ContactStatus::New => counts.new += 1,
                ContactStatus::Processing => counts.processing += 1,
                ContactStatus::Replied => counts.replied += 1,
                ContactStatus::Closed => counts.closed += 1,
            }
            counts
        })
    }

    /// Returns the number of contacts counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.new + self.processing + self.replied + self.closed
    }
}

/// Back-office landing page figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    /// Number of products.
    pub product_count: usize,
    /// Number of categories.
    pub category_count: usize,
    /// Number of news articles.
    pub post_count: usize,
    /// Number of agents.
    pub agent_count: usize,
    /// Contacts by status.
    pub contacts: ContactStatusCounts,
    /// Newest audit entries first.
    pub recent_activity: Vec<AuditLogEntry>,
}
