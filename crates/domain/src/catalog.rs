use inoxviet_core::{AppError, AppResult, RecordId};
use serde::{Deserialize, Serialize};

use crate::record::{optional_text, require_text};
use crate::{PublishStatus, Record, RecordKind};

/// Product category, e.g. "Tấm inox" or "Ống thép".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Record identifier.
    pub id: RecordId,
    /// Display name.
    pub name: String,
    /// URL slug, unique among categories.
    #[serde(default)]
    pub slug: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Publication state.
    #[serde(default)]
    pub status: PublishStatus,
}

impl Record for Category {
    const KIND: RecordKind = RecordKind::Category;

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
        require_text("category name", &self.name)
    }
}

/// Catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Record identifier.
    pub id: RecordId,
    /// Display name.
    pub name: String,
    /// URL slug, unique among products.
    #[serde(default)]
    pub slug: String,
    /// Owning category.
    pub category_id: RecordId,
    /// Stock keeping unit.
    #[serde(default)]
    pub sku: Option<String>,
    /// Unit price in VND. `None` renders as "contact for price".
    #[serde(default)]
    pub price: Option<u64>,
    /// Selling unit such as "tấm" or "kg".
    #[serde(default)]
    pub unit: Option<String>,
    /// Short listing summary.
    #[serde(default)]
    pub summary: Option<String>,
    /// Rich-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Hosted image URLs, first one is the cover.
    #[serde(default)]
    pub image_urls: Vec<String>,
    /// Shown in the home page highlights.
    #[serde(default)]
    pub featured: bool,
    /// Publication state.
    #[serde(default)]
    pub status: PublishStatus,
}

impl Product {
    /// Returns whether the public site lists this product.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.status == PublishStatus::Published
    }
}

impl Record for Product {
    const KIND: RecordKind = RecordKind::Product;

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
        require_text("product name", &self.name)?;
        optional_text("product sku", self.sku.as_deref())?;
        optional_text("product unit", self.unit.as_deref())?;
        if self.image_urls.iter().any(|url| url.trim().is_empty()) {
            return Err(AppError::Validation(
                "product image urls must not be blank".to_owned(),
            ));
        }

        Ok(())
    }
}
