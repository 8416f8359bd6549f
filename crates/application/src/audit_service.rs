use std::sync::Arc;

use inoxviet_core::{AppError, AppResult, RecordId};
use inoxviet_domain::{AuditAction, AuditCategory, AuditLogEntry, AuditSeverity};
use tracing::{debug, warn};

use crate::{AuditLogQuery, AuditLogRepository, AuditRecord, RequestContext};

mod events;


/// Single write path for the audit trail.
///
/// Recording never fails from the caller's point of view: a failed write is
/// reported through `tracing` and swallowed so that it cannot mask or abort
/// the business operation being described.
#[derive(Clone)]
pub struct AuditService {
    repository: Arc<dyn AuditLogRepository>,
}

impl AuditService {
    /// Creates a service from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn AuditLogRepository>) -> Self {
        Self { repository }
    }

    /// Appends one entry to the trail.
    pub async fn record(&self, record: AuditRecord) {
        let action = record.action.clone();
        if action.trim().is_empty() {
            warn!(details = %record.details, "dropping audit entry without action code");
            return;
        }

        match self.repository.append(record).await {
            Ok(entry) => debug!(action = %entry.action, id = %entry.id, "audit entry recorded"),
            Err(error) => warn!(action = %action, error = %error, "failed to record audit entry"),
        }
    }

    /// Lists entries newest first.
    pub async fn list(&self, query: AuditLogQuery) -> AppResult<Vec<AuditLogEntry>> {
        self.repository.list(query).await
    }

    /// Permanently removes one entry and records the removal itself.
    pub async fn delete(&self, context: &RequestContext, id: RecordId) -> AppResult<()> {
        context.require_actor()?;

        let entry = self
            .repository
            .find(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("audit log entry '{id}' does not exist")))?;

        self.repository.delete(id).await?;

        self.record(
            AuditRecord::new(
                AuditAction::AuditLogDeleted.as_str(),
                AuditCategory::System,
                AuditSeverity::Warning,
                format!(
                    "Xóa nhật ký hoạt động: {} ({}, {})",
                    entry.action,
                    entry.id,
                    entry.created_at.to_rfc3339()
                ),
            )
            .with_context(context),
        )
        .await;

        Ok(())
    }
}
