use std::sync::Arc;

use inoxviet_core::AppResult;
use inoxviet_domain::{ChatPromptConfig, SiteSettings};

use crate::{AuditService, RequestContext, SettingsRepository};

/// Application service for the singleton configuration documents.
#[derive(Clone)]
pub struct SettingsService {
    repository: Arc<dyn SettingsRepository>,
    audit_service: AuditService,
}

impl SettingsService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(repository: Arc<dyn SettingsRepository>, audit_service: AuditService) -> Self {
        Self {
            repository,
            audit_service,
        }
    }

    /// Returns saved site settings, or defaults when never saved.
    pub async fn site_settings(&self) -> AppResult<SiteSettings> {
        Ok(self.repository.site_settings().await?.unwrap_or_default())
    }

    /// Validates and saves site settings.
    pub async fn save_site_settings(
        &self,
        context: &RequestContext,
        settings: SiteSettings,
    ) -> AppResult<SiteSettings> {
        context.require_actor()?;
        settings.validate()?;

        self.repository.save_site_settings(settings.clone()).await?;
        self.audit_service.settings_updated(context).await;

        Ok(settings)
    }

    /// Returns the saved chat prompt configuration, or defaults.
    pub async fn chat_prompt_config(&self) -> AppResult<ChatPromptConfig> {
        Ok(self.repository.chat_prompt_config().await?.unwrap_or_default())
    }

    /// Validates and saves the chat prompt configuration.
    pub async fn save_chat_prompt_config(
        &self,
        context: &RequestContext,
        config: ChatPromptConfig,
    ) -> AppResult<ChatPromptConfig> {
        context.require_actor()?;
        config.validate()?;

        self.repository
            .save_chat_prompt_config(config.clone())
            .await?;
        self.audit_service.chat_prompt_updated(context).await;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use inoxviet_core::AppError;
    use inoxviet_domain::{AuditCategory, SiteSettings};

    use crate::test_support::{FakeAuditLogRepository, FakeSettingsRepository, admin_context};
    use crate::{AuditLogQuery, AuditService, RequestContext};

    use super::SettingsService;

    fn service() -> (SettingsService, AuditService) {
        let audit_service = AuditService::new(Arc::new(FakeAuditLogRepository::default()));
        (
            SettingsService::new(Arc::new(FakeSettingsRepository::default()), audit_service.clone()),
            audit_service,
        )
    }

    #[tokio::test]
    async fn unsaved_settings_fall_back_to_defaults() {
        let (service, _) = service();
        let settings = service.site_settings().await;
        assert!(matches!(settings, Ok(value) if value == SiteSettings::default()));
    }

    #[tokio::test]
    async fn saving_settings_is_audited_as_system() {
        let (service, audit_service) = service();
        let settings = SiteSettings {
            hotline: "0283 999 8888".to_owned(),
            ..SiteSettings::default()
        };

        let saved = service.save_site_settings(&admin_context(), settings.clone()).await;
        assert!(saved.is_ok());
        assert!(matches!(service.site_settings().await, Ok(value) if value == settings));

        let entries = audit_service
            .list(AuditLogQuery::default())
            .await
            .unwrap_or_default();
        assert_eq!(entries[0].action, "settings.update");
        assert_eq!(entries[0].category, AuditCategory::System);
    }

    #[tokio::test]
    async fn invalid_settings_are_not_saved() {
        let (service, _) = service();
        let settings = SiteSettings {
            email: "khong-hop-le".to_owned(),
            ..SiteSettings::default()
        };

        let result = service.save_site_settings(&admin_context(), settings).await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let anonymous = service
            .save_site_settings(&RequestContext::anonymous(), SiteSettings::default())
            .await;
        assert!(matches!(anonymous, Err(AppError::Unauthorized(_))));
    }
}
