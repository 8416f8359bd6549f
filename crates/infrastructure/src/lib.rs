//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod http_chat_completion_client;
mod in_memory_audit_log_repository;
mod in_memory_record_repository;
mod in_memory_settings_repository;
mod postgres_audit_log_repository;
mod postgres_record_repository;
mod postgres_settings_repository;

#[cfg(test)]
mod test_database;

pub use http_chat_completion_client::HttpChatCompletionClient;
pub use in_memory_audit_log_repository::InMemoryAuditLogRepository;
pub use in_memory_record_repository::InMemoryRecordRepository;
pub use in_memory_settings_repository::InMemorySettingsRepository;
pub use postgres_audit_log_repository::PostgresAuditLogRepository;
pub use postgres_record_repository::PostgresRecordRepository;
pub use postgres_settings_repository::PostgresSettingsRepository;
