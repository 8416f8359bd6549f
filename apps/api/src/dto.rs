mod audit;
mod auth;
mod chat;
mod common;
mod contacts;
mod toggles;

pub use audit::{AuditLogEntryResponse, AuditLogListQuery};
pub use auth::AuthEventRequest;
pub use chat::{ChatReplyResponse, ChatRequest};
pub use common::{CatalogQuery, HealthResponse, ListQuery, NewsQuery, PageResponse, paginate};
pub use contacts::{ContactListQuery, ContactNoteRequest, ContactSubmissionRequest};
pub use toggles::{ActiveRequest, RoleRequest, StatusRequest};
