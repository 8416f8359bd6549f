use std::sync::Arc;

use inoxviet_core::{AppError, AppResult, RecordId, slugify};
use inoxviet_domain::Record;
use tracing::warn;

use crate::{AuditService, LiveFeed, RecordRepository, RequestContext, Subscription};


/// Create/update/delete path shared by every collection.
///
/// Each mutation validates, writes through the repository, appends an audit
/// entry and pushes a fresh snapshot to the collection's live feed.
#[derive(Clone)]
pub struct RecordService<T: Record> {
    repository: Arc<dyn RecordRepository<T>>,
    audit_service: AuditService,
    feed: LiveFeed<T>,
}

impl<T: Record> RecordService<T> {
    /// Creates a service for one collection.
    #[must_use]
    pub fn new(repository: Arc<dyn RecordRepository<T>>, audit_service: AuditService) -> Self {
        Self {
            repository,
            audit_service,
            feed: LiveFeed::new(),
        }
    }

    /// Lists every record in repository order.
    pub async fn list(&self) -> AppResult<Vec<T>> {
        self.repository.list().await
    }

    /// Returns one record or `NotFound`.
    pub async fn get(&self, id: RecordId) -> AppResult<T> {
        self.repository.find(id).await?.ok_or_else(|| {
            AppError::NotFound(format!("{} '{id}' does not exist", T::KIND.action_prefix()))
        })
    }

    /// Finds one record by slug.
    pub async fn find_by_slug(&self, slug: &str) -> AppResult<Option<T>> {
        self.repository.find_by_slug(slug).await
    }

    /// Subscribes to collection snapshots, starting from the current contents.
    pub async fn subscribe(&self) -> AppResult<Subscription<T>> {
        let records = self.repository.list().await?;
        self.feed.publish(records);
        Ok(self.feed.subscribe())
    }

    /// Stores a new record on behalf of an administrator.
    pub async fn create(&self, context: &RequestContext, record: T) -> AppResult<T> {
        context.require_actor()?;

        let record = self.insert_unaudited(record).await?;
        self.audit_service.record_created(context, &record).await;
        Ok(record)
    }

    /// Replaces an existing record on behalf of an administrator.
    pub async fn update(&self, context: &RequestContext, mut record: T) -> AppResult<T> {
        context.require_actor()?;
        self.get(record.id()).await?;

        self.prepare(&mut record).await?;
        self.repository.update(record.clone()).await?;
        self.audit_service.record_updated(context, &record).await;
        self.refresh_feed().await;

        Ok(record)
    }

    /// Removes a record on behalf of an administrator and returns it.
    pub async fn delete(&self, context: &RequestContext, id: RecordId) -> AppResult<T> {
        context.require_actor()?;
        let record = self.get(id).await?;

        self.repository.delete(id).await?;
        self.audit_service.record_deleted(context, &record).await;
        self.refresh_feed().await;

        Ok(record)
    }

    /// Applies a state change (status, visibility, flag) to one record.
    ///
    /// `change` mutates the record and returns the label of the new state for
    /// the audit message.
    pub async fn change_state<F>(
        &self,
        context: &RequestContext,
        id: RecordId,
        change: F,
    ) -> AppResult<T>
    where
        F: FnOnce(&mut T) -> String + Send,
    {
        context.require_actor()?;
        let mut record = self.get(id).await?;

        let new_state = change(&mut record);
        record.validate()?;
        self.repository.update(record.clone()).await?;
        self.audit_service
            .status_changed(context, &record, new_state.as_str())
            .await;
        self.refresh_feed().await;

        Ok(record)
    }

    /// Validates and stores a record without writing an audit entry.
    ///
    /// Callers are expected to record their own, more specific entry.
    pub(crate) async fn insert_unaudited(&self, mut record: T) -> AppResult<T> {
        self.prepare(&mut record).await?;
        self.repository.insert(record.clone()).await?;
        self.refresh_feed().await;
        Ok(record)
    }

    pub(crate) fn audit_service(&self) -> &AuditService {
        &self.audit_service
    }

    async fn prepare(&self, record: &mut T) -> AppResult<()> {
        record.validate()?;

        let Some(current_slug) = record.slug() else {
            return Ok(());
        };
        let source = if current_slug.trim().is_empty() {
            record.label()
        } else {
            current_slug
        };
        let slug = slugify(source);
        if slug.is_empty() {
            return Err(AppError::Validation(format!(
                "cannot derive a slug from '{source}'"
            )));
        }

        if let Some(existing) = self.repository.find_by_slug(slug.as_str()).await?
            && existing.id() != record.id()
        {
            return Err(AppError::Conflict(format!(
                "{} slug '{slug}' is already used by '{}'",
                T::KIND.action_prefix(),
                existing.label()
            )));
        }

        record.set_slug(slug);
        Ok(())
    }

    async fn refresh_feed(&self) {
        if self.feed.subscriber_count() == 0 {
            return;
        }

        match self.repository.list().await {
            Ok(records) => self.feed.publish(records),
            Err(error) => warn!(
                collection = T::KIND.collection(),
                error = %error,
                "failed to refresh live feed"
            ),
        }
    }
}
