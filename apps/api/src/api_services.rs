use std::sync::Arc;

use inoxviet_application::{
    AuditLogRepository, AuditService, AuthEventService, CatalogService, ChatCompletionClient,
    ChatService, ContactService, ContentService, DashboardService, DirectoryService,
    RecordRepository, SettingsRepository, SettingsService,
};
use inoxviet_core::AppError;
use inoxviet_domain::Record;
use inoxviet_infrastructure::{
    HttpChatCompletionClient, InMemoryAuditLogRepository, InMemoryRecordRepository,
    InMemorySettingsRepository, PostgresAuditLogRepository, PostgresRecordRepository,
    PostgresSettingsRepository,
};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};

use crate::api_config::{ApiConfig, StorageBackend};
use crate::state::AppState;

/// Repository factory for the configured backend.
#[derive(Clone)]
pub enum Storage {
    Memory,
    Postgres(PgPool),
}

impl Storage {
    pub async fn connect(backend: &StorageBackend) -> Result<Self, AppError> {
        match backend {
            StorageBackend::Memory => {
                warn!("using in-memory storage; data is lost on restart");
                Ok(Self::Memory)
            }
            StorageBackend::Postgres { database_url } => {
                let pool = PgPoolOptions::new()
                    .max_connections(10)
                    .connect(database_url)
                    .await
                    .map_err(|error| {
                        AppError::Internal(format!("failed to connect to database: {error}"))
                    })?;

                run_migrations(&pool).await?;
                Ok(Self::Postgres(pool))
            }
        }
    }

    fn records<T: Record>(&self) -> Arc<dyn RecordRepository<T>> {
        match self {
            Self::Memory => Arc::new(InMemoryRecordRepository::<T>::new()),
            Self::Postgres(pool) => Arc::new(PostgresRecordRepository::<T>::new(pool.clone())),
        }
    }

    fn settings(&self) -> Arc<dyn SettingsRepository> {
        match self {
            Self::Memory => Arc::new(InMemorySettingsRepository::new()),
            Self::Postgres(pool) => Arc::new(PostgresSettingsRepository::new(pool.clone())),
        }
    }

    fn audit_log(&self) -> Arc<dyn AuditLogRepository> {
        match self {
            Self::Memory => Arc::new(InMemoryAuditLogRepository::new()),
            Self::Postgres(pool) => Arc::new(PostgresAuditLogRepository::new(pool.clone())),
        }
    }
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::migrate!("../../crates/infrastructure/migrations")
        .run(pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to run migrations: {error}")))?;

    info!("database migrations applied successfully");
    Ok(())
}

pub fn build_state(config: &ApiConfig, storage: &Storage) -> Result<AppState, AppError> {
    let audit_service = AuditService::new(storage.audit_log());

    let catalog_service = CatalogService::new(
        storage.records(),
        storage.records(),
        audit_service.clone(),
    );
    let content_service = ContentService::new(
        storage.records(),
        storage.records(),
        storage.records(),
        audit_service.clone(),
    );
    let contact_service = ContactService::new(storage.records(), audit_service.clone());
    let directory_service =
        DirectoryService::new(storage.records(), storage.records(), audit_service.clone());
    let settings_service = SettingsService::new(storage.settings(), audit_service.clone());

    let chat_client = match &config.chat_endpoint {
        Some(endpoint) => Some(Arc::new(HttpChatCompletionClient::new(
            endpoint.url.as_str(),
            endpoint.api_key.clone(),
            endpoint.model.clone(),
            endpoint.timeout,
        )?) as Arc<dyn ChatCompletionClient>),
        None => {
            info!("CHAT_COMPLETION_URL not set; chat assistant disabled");
            None
        }
    };
    let chat_service = ChatService::new(
        catalog_service.clone(),
        directory_service.clone(),
        settings_service.clone(),
        chat_client,
        config.chat_history_limit,
    );

    let dashboard_service = DashboardService::new(
        catalog_service.clone(),
        content_service.clone(),
        contact_service.clone(),
        directory_service.clone(),
        audit_service.clone(),
    );
    let auth_event_service = AuthEventService::new(audit_service.clone());

    Ok(AppState {
        catalog_service,
        content_service,
        contact_service,
        directory_service,
        settings_service,
        chat_service,
        dashboard_service,
        audit_service,
        auth_event_service,
        frontend_url: config.frontend_url.clone(),
        trusted_proxies: config.trusted_proxies.clone().into(),
        default_page_size: config.default_page_size,
    })
}
