use std::sync::Arc;

use inoxviet_application::{
    AuditService, AuthEventService, CatalogService, ChatService, ContactService, ContentService,
    DashboardService, DirectoryService, SettingsService,
};
use ipnet::IpNet;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: CatalogService,
    pub content_service: ContentService,
    pub contact_service: ContactService,
    pub directory_service: DirectoryService,
    pub settings_service: SettingsService,
    pub chat_service: ChatService,
    pub dashboard_service: DashboardService,
    pub audit_service: AuditService,
    pub auth_event_service: AuthEventService,
    pub frontend_url: String,
    pub trusted_proxies: Arc<[IpNet]>,
    pub default_page_size: usize,
}
