use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use sqlx::PgPool;
use sqlx::types::Json;

use inoxviet_application::SettingsRepository;
use inoxviet_core::{AppError, AppResult};
use inoxviet_domain::{ChatPromptConfig, SiteSettings};

const SITE_SETTINGS_KEY: &str = "site_settings";
const CHAT_PROMPT_KEY: &str = "chat_prompt_config";

/// PostgreSQL-backed store for the singleton configuration documents.
#[derive(Clone)]
pub struct PostgresSettingsRepository {
    pool: PgPool,
}

impl PostgresSettingsRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        let row = sqlx::query_scalar::<_, Json<Value>>("SELECT data FROM documents WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|error| AppError::Internal(format!("failed to load '{key}': {error}")))?;

        row.map(|data| {
            serde_json::from_value(data.0)
                .map_err(|error| AppError::Internal(format!("failed to decode '{key}': {error}")))
        })
        .transpose()
    }

    async fn save<T: Serialize>(&self, key: &str, value: &T) -> AppResult<()> {
        let data = serde_json::to_value(value)
            .map_err(|error| AppError::Internal(format!("failed to encode '{key}': {error}")))?;

        sqlx::query(
            r#"
            INSERT INTO documents (key, data)
            VALUES ($1, $2)
            ON CONFLICT (key) DO UPDATE
            SET data = EXCLUDED.data, updated_at = now()
            "#,
        )
        .bind(key)
        .bind(Json(data))
        .execute(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to save '{key}': {error}")))?;

        Ok(())
    }
}

#[async_trait]
impl SettingsRepository for PostgresSettingsRepository {
    async fn site_settings(&self) -> AppResult<Option<SiteSettings>> {
        self.load(SITE_SETTINGS_KEY).await
    }

    async fn save_site_settings(&self, settings: SiteSettings) -> AppResult<()> {
        self.save(SITE_SETTINGS_KEY, &settings).await
    }

    async fn chat_prompt_config(&self) -> AppResult<Option<ChatPromptConfig>> {
        self.load(CHAT_PROMPT_KEY).await
    }

    async fn save_chat_prompt_config(&self, config: ChatPromptConfig) -> AppResult<()> {
        self.save(CHAT_PROMPT_KEY, &config).await
    }
}
