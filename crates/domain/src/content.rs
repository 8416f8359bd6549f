use chrono::{DateTime, Utc};
use inoxviet_core::{AppError, AppResult, RecordId};
use serde::{Deserialize, Serialize};

use crate::record::{optional_text, require_text};
use crate::{PublishStatus, Record, RecordKind};

/// News article shown in the "Tin tức" section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsArticle {
    /// Record identifier.
    pub id: RecordId,
    /// Headline.
    pub title: String,
    /// URL slug, unique among articles.
    #[serde(default)]
    pub slug: String,
    /// Teaser text.
    #[serde(default)]
    pub summary: Option<String>,
    /// Rich-text body.
    pub content: String,
    /// Cover image.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Attached tags. Names are resolved at read time.
    #[serde(default)]
    pub tag_ids: Vec<RecordId>,
    /// Publication state.
    #[serde(default)]
    pub status: PublishStatus,
    /// Set the first time the article is published.
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl Record for NewsArticle {
    const KIND: RecordKind = RecordKind::Post;

    fn id(&self) -> RecordId {
        self.id
    }

    fn label(&self) -> &str {
        self.title.as_str()
    }

    fn slug(&self) -> Option<&str> {
        Some(self.slug.as_str())
    }

    fn set_slug(&mut self, slug: String) {
        self.slug = slug;
    }

    fn validate(&self) -> AppResult<()> {
        require_text("post title", &self.title)?;
        require_text("post content", &self.content)?;
        optional_text("post image url", self.image_url.as_deref())
    }
}

/// Tag attached to news articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Record identifier.
    pub id: RecordId,
    /// Display name.
    pub name: String,
    /// URL slug, unique among tags.
    #[serde(default)]
    pub slug: String,
}

impl Record for Tag {
    const KIND: RecordKind = RecordKind::Tag;

    fn id(&self) -> RecordId {
        self.id
    }

    fn label(&self) -> &str {
        self.name.as_str()
    }

    fn slug(&self) -> Option<&str> {
        Some(self.slug.as_str())
    }

    fn set_slug(&mut self, slug: String) {
        self.slug = slug;
    }

    fn validate(&self) -> AppResult<()> {
        require_text("tag name", &self.name)
    }
}

/// Home page banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slider {
    /// Record identifier.
    pub id: RecordId,
    /// Caption.
    pub title: String,
    /// Hosted banner image.
    pub image_url: String,
    /// Click-through target.
    #[serde(default)]
    pub link_url: Option<String>,
    /// Display order, ascending.
    #[serde(default)]
    pub position: u32,
    /// Whether the banner rotates on the home page.
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

impl Record for Slider {
    const KIND: RecordKind = RecordKind::Slider;

    fn id(&self) -> RecordId {
        self.id
    }

    fn label(&self) -> &str {
        self.title.as_str()
    }

    fn validate(&self) -> AppResult<()> {
        require_text("slider title", &self.title)?;
        require_text("slider image url", &self.image_url)?;
        if let Some(link_url) = self.link_url.as_deref()
            && !(link_url.starts_with('/') || link_url.starts_with("http"))
        {
            return Err(AppError::Validation(
                "slider link must be a site path or an http(s) url".to_owned(),
            ));
        }

        Ok(())
    }
}
