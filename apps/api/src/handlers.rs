use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::Value;

use inoxviet_application::RecordService;
use inoxviet_core::{AppError, AppResult, RecordId, slugify};
use inoxviet_domain::{
    AdminUser, Agent, ArticleView, Category, Contact, ContactStatus, DashboardSummary,
    NewsArticle, Product, ProductView, PublishStatus, Record, Slider, Tag, UserRole,
};

use crate::dto::{
    ActiveRequest, AuditLogEntryResponse, AuditLogListQuery, AuthEventRequest, CatalogQuery,
    ChatReplyResponse, ChatRequest, ContactListQuery, ContactNoteRequest,
    ContactSubmissionRequest, HealthResponse, ListQuery, NewsQuery, PageResponse, RoleRequest,
    StatusRequest, paginate,
};
use crate::error::ApiResult;
use crate::extract::{Admin, ApiJson, ApiPath, ApiQuery, Caller};
use crate::state::AppState;

mod audit;
mod auth_events;
mod catalog;
mod chat;
mod collections;
mod contacts;
mod content;
mod dashboard;
mod directory;
mod health;
mod settings;

#[cfg(test)]
mod tests;

pub use audit::{delete_audit_log_entry_handler, list_audit_log_handler};
pub use auth_events::record_auth_event_handler;
pub use catalog::{
    public_categories_handler, public_product_handler, public_products_handler,
    set_category_status_handler, set_product_status_handler, toggle_product_featured_handler,
};
pub use chat::chat_handler;
pub use collections::{
    Collection, create_record_handler, delete_record_handler, get_record_handler,
    list_records_handler, update_record_handler,
};
pub use contacts::{
    delete_contact_handler, get_contact_handler, list_contacts_handler,
    set_contact_note_handler, set_contact_status_handler, submit_contact_handler,
};
pub use content::{
    active_sliders_handler, public_article_handler, public_news_handler,
    set_post_status_handler, set_slider_active_handler,
};
pub use dashboard::dashboard_handler;
pub use directory::{
    public_agents_handler, set_agent_active_handler, set_user_active_handler,
    set_user_role_handler,
};
pub use health::health_handler;
pub use settings::{
    chat_prompt_handler, public_site_settings_handler, site_settings_handler,
    update_chat_prompt_handler, update_site_settings_handler,
};

/// Accent-insensitive match of a search term against a label and slug.
fn matches_search(needle: &str, label: &str, slug: Option<&str>) -> bool {
    let needle = slugify(needle);
    needle.is_empty()
        || slugify(label).contains(needle.as_str())
        || slug.is_some_and(|slug| slug.contains(needle.as_str()))
}
