use std::fmt::{Debug, Formatter};

use async_trait::async_trait;
use tokio::sync::RwLock;

use inoxviet_application::RecordRepository;
use inoxviet_core::{AppError, AppResult, RecordId};
use inoxviet_domain::Record;


/// In-memory collection that lists records in insertion order.
pub struct InMemoryRecordRepository<T> {
    records: RwLock<Vec<T>>,
}

impl<T> InMemoryRecordRepository<T> {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl<T> Default for InMemoryRecordRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for InMemoryRecordRepository<T> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("InMemoryRecordRepository").finish_non_exhaustive()
    }
}

#[async_trait]
impl<T: Record> RecordRepository<T> for InMemoryRecordRepository<T> {
    async fn list(&self) -> AppResult<Vec<T>> {
        Ok(self.records.read().await.clone())
    }

    async fn find(&self, id: RecordId) -> AppResult<Option<T>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|record| record.id() == id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<T>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|record| record.slug() == Some(slug))
            .cloned())
    }

    async fn insert(&self, record: T) -> AppResult<()> {
        let mut records = self.records.write().await;
        if records.iter().any(|existing| existing.id() == record.id()) {
            return Err(AppError::Conflict(format!(
                "{} '{}' already exists",
                T::KIND.action_prefix(),
                record.id()
            )));
        }

        records.push(record);
        Ok(())
    }

    async fn update(&self, record: T) -> AppResult<()> {
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|existing| existing.id() == record.id())
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "{} '{}' does not exist",
                    T::KIND.action_prefix(),
                    record.id()
                ))
            })?;

        *slot = record;
        Ok(())
    }

    async fn delete(&self, id: RecordId) -> AppResult<()> {
        let mut records = self.records.write().await;
        let position = records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| {
                AppError::NotFound(format!("{} '{id}' does not exist", T::KIND.action_prefix()))
            })?;

        records.remove(position);
        Ok(())
    }
}
