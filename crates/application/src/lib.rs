//! Application services and ports.

#![forbid(unsafe_code)]

mod audit_ports;
mod audit_service;
mod auth_event_service;
mod catalog_service;
mod chat_ports;
mod chat_service;
mod contact_service;
mod content_service;
mod dashboard_service;
mod directory_service;
mod live_feed;
mod record_ports;
mod record_service;
mod request_context;
mod settings_service;

#[cfg(test)]
mod test_support;

pub use audit_ports::{AuditLogQuery, AuditLogRepository, AuditRecord};
pub use audit_service::AuditService;
pub use auth_event_service::{AuthEvent, AuthEventService};
pub use catalog_service::CatalogService;
pub use chat_ports::{ChatCompletionClient, ChatCompletionRequest, ChatRole, ChatTurn};
pub use chat_service::ChatService;
pub use contact_service::{ContactService, ContactSubmission};
pub use content_service::ContentService;
pub use dashboard_service::{DashboardService, RECENT_ACTIVITY_LIMIT};
pub use directory_service::DirectoryService;
pub use live_feed::{LiveFeed, Subscription};
pub use record_ports::{RecordRepository, SettingsRepository};
pub use record_service::RecordService;
pub use request_context::RequestContext;
pub use settings_service::SettingsService;
