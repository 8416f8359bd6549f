use inoxviet_domain::AuditLogEntry;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Query string of the audit log viewer.
#[derive(Debug, Default, Deserialize)]
pub struct AuditLogListQuery {
    pub category: Option<String>,
    pub severity: Option<String>,
    pub limit: Option<usize>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// API representation of an audit log entry.
#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct AuditLogEntryResponse {
    pub id: String,
    pub action: String,
    #[serde(rename = "type")]
    pub category: String,
    #[serde(rename = "level")]
    pub severity: String,
    pub details: String,
    pub user_id: Option<String>,
    pub actor_details: Option<String>,
    pub ip_address: Option<String>,
    pub created_at: String,
}

impl From<AuditLogEntry> for AuditLogEntryResponse {
    fn from(value: AuditLogEntry) -> Self {
        Self {
            id: value.id.to_string(),
            action: value.action,
            category: value.category.as_str().to_owned(),
            severity: value.severity.as_str().to_owned(),
            details: value.details,
            user_id: value.user_id,
            actor_details: value.actor_details,
            ip_address: value.ip_address,
            created_at: value.created_at.to_rfc3339(),
        }
    }
}
