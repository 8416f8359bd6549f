use std::str::FromStr;

use inoxviet_core::{AppError, AppResult, NonEmptyString, RecordId};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::AuditCategory;

/// Kind of a persisted collection record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// Catalog product.
    Product,
    /// Catalog category.
    Category,
    /// News article.
    Post,
    /// Article tag.
    Tag,
    /// Home page slider banner.
    Slider,
    /// Contact form submission.
    Contact,
    /// Distribution agent.
    Agent,
    /// Back-office account.
    User,
}

impl RecordKind {
    /// Returns the storage collection name.
    #[must_use]
    pub fn collection(&self) -> &'static str {
        match self {
            Self::Product => "products",
            Self::Category => "categories",
            Self::Post => "posts",
            Self::Tag => "tags",
            Self::Slider => "sliders",
            Self::Contact => "contacts",
            Self::Agent => "agents",
            Self::User => "users",
        }
    }

    /// Returns the prefix of audit action codes, e.g. `product` in `product.delete`.
    #[must_use]
    pub fn action_prefix(&self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Category => "category",
            Self::Post => "post",
            Self::Tag => "tag",
            Self::Slider => "slider",
            Self::Contact => "contact",
            Self::Agent => "agent",
            Self::User => "user",
        }
    }

    /// Returns the audit category mutations of this kind are filed under.
    #[must_use]
    pub fn audit_category(&self) -> AuditCategory {
        match self {
            Self::Product | Self::Category => AuditCategory::Product,
            Self::Post | Self::Tag | Self::Slider | Self::Contact | Self::Agent => {
                AuditCategory::Content
            }
            Self::User => AuditCategory::User,
        }
    }

    /// Returns the Vietnamese noun used in audit messages.
    #[must_use]
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Product => "sản phẩm",
            Self::Category => "danh mục",
            Self::Post => "bài viết",
            Self::Tag => "thẻ",
            Self::Slider => "slider",
            Self::Contact => "liên hệ",
            Self::Agent => "đại lý",
            Self::User => "người dùng",
        }
    }
}

/// Publication state shared by catalog and editorial records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishStatus {
    /// Visible on the public site.
    #[default]
    Published,
    /// Work in progress.
    Draft,
    /// Hidden from the public site.
    Hidden,
}

impl PublishStatus {
    /// Returns a stable storage value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Draft => "draft",
            Self::Hidden => "hidden",
        }
    }

    /// Returns the Vietnamese label used in audit messages.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Published => "hiển thị",
            Self::Draft => "bản nháp",
            Self::Hidden => "ẩn",
        }
    }
}

impl FromStr for PublishStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "published" => Ok(Self::Published),
            "draft" => Ok(Self::Draft),
            "hidden" => Ok(Self::Hidden),
            _ => Err(AppError::Validation(format!(
                "unknown publish status '{value}'"
            ))),
        }
    }
}

/// A record stored in one of the site's collections.
pub trait Record: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Kind of this record.
    const KIND: RecordKind;

    /// Returns the record identifier.
    fn id(&self) -> RecordId;

    /// Returns the human-readable label used in audit messages.
    fn label(&self) -> &str;

    /// Returns the URL slug for kinds that are addressed by slug.
    fn slug(&self) -> Option<&str> {
        None
    }

    /// Replaces the slug. No-op for kinds without one.
    fn set_slug(&mut self, _slug: String) {}

    /// Checks required fields.
    fn validate(&self) -> AppResult<()>;
}

/// Fails with a field-specific message when `value` is blank.
pub(crate) fn require_text(field: &str, value: &str) -> AppResult<()> {
    NonEmptyString::new(value)
        .map(|_| ())
        .map_err(|_| AppError::Validation(format!("{field} is required")))
}

/// Like [`require_text`] for optional fields that must not be blank when present.
pub(crate) fn optional_text(field: &str, value: Option<&str>) -> AppResult<()> {
    value.map_or(Ok(()), |value| require_text(field, value))
}
