use async_trait::async_trait;
use inoxviet_core::{AppResult, RecordId};
use inoxviet_domain::{ChatPromptConfig, Record, SiteSettings};

/// Port for one collection of records.
#[async_trait]
pub trait RecordRepository<T: Record>: Send + Sync {
    /// Lists every record of the collection.
    async fn list(&self) -> AppResult<Vec<T>>;

    /// Finds one record by id.
    async fn find(&self, id: RecordId) -> AppResult<Option<T>>;

    /// Finds one record by slug.
    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<T>>;

    /// Stores a new record. Fails with `Conflict` when the id is taken.
    async fn insert(&self, record: T) -> AppResult<()>;

    /// Replaces an existing record. Fails with `NotFound` when it is missing.
    async fn update(&self, record: T) -> AppResult<()>;

    /// Removes a record. Fails with `NotFound` when it is missing.
    async fn delete(&self, id: RecordId) -> AppResult<()>;
}

/// Port for the singleton configuration documents.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Loads site settings, if saved before.
    async fn site_settings(&self) -> AppResult<Option<SiteSettings>>;

    /// Replaces site settings.
    async fn save_site_settings(&self, settings: SiteSettings) -> AppResult<()>;

    /// Loads the chat prompt configuration, if saved before.
    async fn chat_prompt_config(&self) -> AppResult<Option<ChatPromptConfig>>;

    /// Replaces the chat prompt configuration.
    async fn save_chat_prompt_config(&self, config: ChatPromptConfig) -> AppResult<()>;
}
