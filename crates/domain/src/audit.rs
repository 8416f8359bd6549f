use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use inoxviet_core::{AppError, RecordId};
use serde::{Deserialize, Serialize};

/// Area of the system an audit entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuditCategory {
    /// Sign-in, sign-out and session events.
    Auth,
    /// Catalog mutations (products and categories).
    Product,
    /// Editorial content (posts, tags, sliders, contacts, agents).
    Content,
    /// Administrator account management.
    User,
    /// Site settings, chat configuration and the audit trail itself.
    System,
}

impl AuditCategory {
    /// Returns the persisted value for this category.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auth => "Auth",
            Self::Product => "Product",
            Self::Content => "Content",
            Self::User => "User",
            Self::System => "System",
        }
    }

    /// Returns all known categories.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[AuditCategory] = &[
            AuditCategory::Auth,
            AuditCategory::Product,
            AuditCategory::Content,
            AuditCategory::User,
            AuditCategory::System,
        ];

        ALL
    }
}

impl FromStr for AuditCategory {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown audit category '{value}'")))
    }
}

impl Display for AuditCategory {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// How noteworthy an audit entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuditSeverity {
    /// Routine event.
    Information,
    /// A mutation completed.
    Success,
    /// Destructive or suspicious event.
    Warning,
    /// A failed operation.
    Error,
}

impl AuditSeverity {
    /// Returns the persisted value for this severity.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Information => "Information",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }

    /// Returns all known severities.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[AuditSeverity] = &[
            AuditSeverity::Information,
            AuditSeverity::Success,
            AuditSeverity::Warning,
            AuditSeverity::Error,
        ];

        ALL
    }
}

impl FromStr for AuditSeverity {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|severity| severity.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown audit severity '{value}'")))
    }
}

impl Display for AuditSeverity {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Well-known audit action codes emitted by application use-cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditAction {
    /// Administrator signed in.
    LoginSucceeded,
    /// Sign-in attempt was rejected.
    LoginFailed,
    /// Administrator signed out.
    LoggedOut,
    /// A visitor submitted the contact form.
    ContactSubmitted,
    /// Site settings were saved.
    SettingsUpdated,
    /// Chat assistant prompt configuration was saved.
    ChatPromptUpdated,
    /// An audit entry was removed.
    AuditLogDeleted,
}

impl AuditAction {
    /// Returns a stable storage value for this action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LoginSucceeded => "auth.login.success",
            Self::LoginFailed => "auth.login.failure",
            Self::LoggedOut => "auth.logout",
            Self::ContactSubmitted => "contact.submit",
            Self::SettingsUpdated => "settings.update",
            Self::ChatPromptUpdated => "chat_prompt.update",
            Self::AuditLogDeleted => "audit_log.delete",
        }
    }
}

/// One immutable entry of the audit trail, in its persisted shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    /// Store-assigned identifier.
    pub id: RecordId,
    /// Short action code such as `product.delete`.
    pub action: String,
    /// Area the action belongs to.
    #[serde(rename = "type")]
    pub category: AuditCategory,
    /// Severity level.
    #[serde(rename = "level")]
    pub severity: AuditSeverity,
    /// Human-readable description.
    pub details: String,
    /// Authenticated actor, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Free-text actor description used when nobody is signed in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor_details: Option<String>,
    /// Network origin of the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    /// Store clock at write time.
    pub created_at: DateTime<Utc>,
}
