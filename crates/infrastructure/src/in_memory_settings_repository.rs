use async_trait::async_trait;
use tokio::sync::RwLock;

use inoxviet_application::SettingsRepository;
use inoxviet_core::AppResult;
use inoxviet_domain::{ChatPromptConfig, SiteSettings};

/// In-memory holder for the configuration documents.
#[derive(Debug, Default)]
pub struct InMemorySettingsRepository {
    site: RwLock<Option<SiteSettings>>,
    chat_prompt: RwLock<Option<ChatPromptConfig>>,
}

impl InMemorySettingsRepository {
    /// Creates a repository with nothing saved.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepository {
    async fn site_settings(&self) -> AppResult<Option<SiteSettings>> {
        Ok(self.site.read().await.clone())
    }

    async fn save_site_settings(&self, settings: SiteSettings) -> AppResult<()> {
        *self.site.write().await = Some(settings);
        Ok(())
    }

    async fn chat_prompt_config(&self) -> AppResult<Option<ChatPromptConfig>> {
        Ok(self.chat_prompt.read().await.clone())
    }

    async fn save_chat_prompt_config(&self, config: ChatPromptConfig) -> AppResult<()> {
        *self.chat_prompt.write().await = Some(config);
        Ok(())
    }
}
