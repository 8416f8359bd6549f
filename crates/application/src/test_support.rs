use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::Mutex;

use inoxviet_core::{AppError, AppResult, RecordId, UserIdentity};
use inoxviet_domain::{AuditLogEntry, ChatPromptConfig, Record, SiteSettings};

use crate::{
    AuditLogQuery, AuditLogRepository, AuditRecord, RecordRepository, RequestContext,
    SettingsRepository,
};

pub(crate) fn admin_context() -> RequestContext {
    RequestContext::admin(UserIdentity::new(
        "admin-1",
        "Quản trị viên",
        Some("admin@inoxviet.vn".to_owned()),
    ))
    .with_origin(Some("203.0.113.7".to_owned()))
}

#[derive(Default)]
pub(crate) struct FakeAuditLogRepository {
    pub(crate) entries: Mutex<Vec<AuditLogEntry>>,
    pub(crate) fail_appends: bool,
}

impl FakeAuditLogRepository {
    pub(crate) fn failing() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            fail_appends: true,
        }
    }
}

#[async_trait]
impl AuditLogRepository for FakeAuditLogRepository {
    async fn append(&self, record: AuditRecord) -> AppResult<AuditLogEntry> {
        if self.fail_appends {
            return Err(AppError::Internal("audit store offline".to_owned()));
        }

        let mut entries = self.entries.lock().await;
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
        let entries = self.entries.lock().await;
        Ok(entries
            .iter()
            .rev()
            .filter(|entry| query.matches(entry))
            .take(query.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn find(&self, id: RecordId) -> AppResult<Option<AuditLogEntry>> {
        let entries = self.entries.lock().await;
        Ok(entries.iter().find(|entry| entry.id == id).cloned())
    }

    async fn delete(&self, id: RecordId) -> AppResult<()> {
        let mut entries = self.entries.lock().await;
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        if entries.len() == before {
            return Err(AppError::NotFound(format!("audit log entry '{id}'")));
        }
        Ok(())
    }
}

pub(crate) struct FakeRecordRepository<T> {
    pub(crate) records: Mutex<BTreeMap<RecordId, T>>,
}

impl<T> Default for FakeRecordRepository<T> {
    fn default() -> Self {
        Self {
            records: Mutex::new(BTreeMap::new()),
        }
    }
}

impl<T: Record> FakeRecordRepository<T> {
    pub(crate) fn with_records(records: Vec<T>) -> Self {
        Self {
            records: Mutex::new(
                records
                    .into_iter()
                    .map(|record| (record.id(), record))
                    .collect(),
            ),
        }
    }
}

#[async_trait]
impl<T: Record> RecordRepository<T> for FakeRecordRepository<T> {
    async fn list(&self) -> AppResult<Vec<T>> {
        Ok(self.records.lock().await.values().cloned().collect())
    }

    async fn find(&self, id: RecordId) -> AppResult<Option<T>> {
        Ok(self.records.lock().await.get(&id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<T>> {
        Ok(self
            .records
            .lock()
            .await
            .values()
            .find(|record| record.slug() == Some(slug))
            .cloned())
    }

    async fn insert(&self, record: T) -> AppResult<()> {
        let mut records = self.records.lock().await;
        if records.contains_key(&record.id()) {
            return Err(AppError::Conflict(format!("record '{}' exists", record.id())));
        }
        records.insert(record.id(), record);
        Ok(())
    }

    async fn update(&self, record: T) -> AppResult<()> {
        let mut records = self.records.lock().await;
        if !records.contains_key(&record.id()) {
            return Err(AppError::NotFound(format!("record '{}'", record.id())));
        }
        records.insert(record.id(), record);
        Ok(())
    }

    async fn delete(&self, id: RecordId) -> AppResult<()> {
        self.records
            .lock()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("record '{id}'")))
    }
}

#[derive(Default)]
pub(crate) struct FakeSettingsRepository {
    pub(crate) site: Mutex<Option<SiteSettings>>,
    pub(crate) chat: Mutex<Option<ChatPromptConfig>>,
}

#[async_trait]
impl SettingsRepository for FakeSettingsRepository {
    async fn site_settings(&self) -> AppResult<Option<SiteSettings>> {
        Ok(self.site.lock().await.clone())
    }

    async fn save_site_settings(&self, settings: SiteSettings) -> AppResult<()> {
        *self.site.lock().await = Some(settings);
        Ok(())
    }

    async fn chat_prompt_config(&self) -> AppResult<Option<ChatPromptConfig>> {
        Ok(self.chat.lock().await.clone())
    }

    async fn save_chat_prompt_config(&self, config: ChatPromptConfig) -> AppResult<()> {
        *self.chat.lock().await = Some(config);
        Ok(())
    }
}
