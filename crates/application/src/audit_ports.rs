use async_trait::async_trait;
use inoxviet_core::{AppResult, RecordId};
use inoxviet_domain::{AuditCategory, AuditLogEntry, AuditSeverity};

use crate::RequestContext;

/// Audit entry as submitted by a caller; the store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRecord {
    /// Short action code such as `product.delete`.
    pub action: String,
    /// Area the action belongs to.
    pub category: AuditCategory,
    /// Severity level.
    pub severity: AuditSeverity,
    /// Human-readable description.
    pub details: String,
    /// Authenticated actor.
    pub user_id: Option<String>,
    /// Free-text actor description for anonymous events.
    pub actor_details: Option<String>,
    /// Network origin.
    pub ip_address: Option<String>,
}

impl AuditRecord {
    /// Creates a record without actor or origin.
    #[must_use]
    pub fn new(
        action: impl Into<String>,
        category: AuditCategory,
        severity: AuditSeverity,
        details: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            category,
            severity,
            details: details.into(),
            user_id: None,
            actor_details: None,
            ip_address: None,
        }
    }

    /// Sets the authenticated actor.
    #[must_use]
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Sets the free-text actor description.
    #[must_use]
    pub fn with_actor_details(mut self, actor_details: impl Into<String>) -> Self {
        self.actor_details = Some(actor_details.into());
        self
    }

    /// Sets the network origin.
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.ip_address = Some(origin.into());
        self
    }

    /// Copies actor and origin from a request context.
    #[must_use]
    pub fn with_context(mut self, context: &RequestContext) -> Self {
        if let Some(actor) = context.actor() {
            self.user_id = Some(actor.subject().to_owned());
        }
        if let Some(origin) = context.origin() {
            self.ip_address = Some(origin.to_owned());
        }
        self
    }
}

/// Query parameters for audit log listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditLogQuery {
    /// Only entries of this category.
    pub category: Option<AuditCategory>,
    /// Only entries of this severity.
    pub severity: Option<AuditSeverity>,
    /// Maximum rows returned.
    pub limit: Option<usize>,
}

impl AuditLogQuery {
    /// Returns whether an entry passes the category and severity filters.
    #[must_use]
    pub fn matches(&self, entry: &AuditLogEntry) -> bool {
        self.category.is_none_or(|category| entry.category == category)
            && self.severity.is_none_or(|severity| entry.severity == severity)
    }
}

/// Port for the append-only audit trail.
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Persists one entry, assigning its id and creation timestamp.
    async fn append(&self, record: AuditRecord) -> AppResult<AuditLogEntry>;

    /// Lists entries newest first.
    async fn list(&self, query: AuditLogQuery) -> AppResult<Vec<AuditLogEntry>>;

    /// Finds one entry by id.
    async fn find(&self, id: RecordId) -> AppResult<Option<AuditLogEntry>>;

    /// Removes one entry. Fails with `NotFound` when it does not exist.
    async fn delete(&self, id: RecordId) -> AppResult<()>;
}
