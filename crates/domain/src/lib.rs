//! Domain records, audit vocabulary and read-time projections.

#![forbid(unsafe_code)]

mod agent;
mod audit;
mod catalog;
mod contact;
mod content;
mod dashboard;
mod projection;
mod record;
mod settings;
mod user;

pub use agent::Agent;
pub use audit::{AuditAction, AuditCategory, AuditLogEntry, AuditSeverity};
pub use catalog::{Category, Product};
pub use contact::{Contact, ContactStatus, validate_phone};
pub use content::{NewsArticle, Slider, Tag};
pub use dashboard::{ContactStatusCounts, DashboardSummary};
pub use projection::{ArticleView, ProductView, project_articles, project_products};
pub use record::{PublishStatus, Record, RecordKind};
pub use settings::{ChatPromptConfig, SiteSettings};
pub use user::{AdminUser, EmailAddress, UserRole};
