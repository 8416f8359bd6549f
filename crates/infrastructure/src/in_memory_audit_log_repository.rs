use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;

use inoxviet_application::{AuditLogQuery, AuditLogRepository, AuditRecord};
use inoxviet_core::{AppError, AppResult, RecordId};
use inoxviet_domain::AuditLogEntry;

/// In-memory audit trail, kept in append order.
#[derive(Debug, Default)]
pub struct InMemoryAuditLogRepository {
    entries: RwLock<Vec<AuditLogEntry>>,
}

impl InMemoryAuditLogRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuditLogRepository for InMemoryAuditLogRepository {
    async fn append(&self, record: AuditRecord) -> AppResult<AuditLogEntry> {
        let mut entries = self.entries.write().await;

        // Timestamps stay strictly increasing so newest-first order is total.
        let now = Utc::now();
        let created_at = match entries.last() {
            Some(last) if last.created_at >= now => last.created_at + Duration::microseconds(1),
            _ => now,
        };

        let entry = AuditLogEntry {
            id: RecordId::new(),
            action: record.action,
            category: record.category,
            severity: record.severity,
            details: record.details,
            user_id: record.user_id,
            actor_details: record.actor_details,
            ip_address: record.ip_address,
            created_at,
        };
        entries.push(entry.clone());

        Ok(entry)
    }

    async fn list(&self, query: AuditLogQuery) -> AppResult<Vec<AuditLogEntry>> {
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .rev()
            .filter(|entry| query.matches(entry))
            .take(query.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn find(&self, id: RecordId) -> AppResult<Option<AuditLogEntry>> {
        let entries = self.entries.read().await;
        Ok(entries.iter().find(|entry| entry.id == id).cloned())
    }

    async fn delete(&self, id: RecordId) -> AppResult<()> {
        let mut entries = self.entries.write().await;
        let position = entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| AppError::NotFound(format!("audit log entry '{id}' does not exist")))?;
        entries.remove(position);
        Ok(())
    }
}
