use std::collections::HashMap;

use inoxviet_core::RecordId;
use serde::Serialize;

use crate::{Category, NewsArticle, Product, Tag};

/// Product joined with its category name for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductView {
    /// Persisted product.
    #[serde(flatten)]
    pub product: Product,
    /// Name of the owning category, `None` when it no longer exists.
    pub category_name: Option<String>,
}

/// Article joined with the names of its tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleView {
    /// Persisted article.
    #[serde(flatten)]
    pub article: NewsArticle,
    /// Names of resolvable tags, in the article's tag order.
    pub tag_names: Vec<String>,
}

/// Joins products with their categories. Order of `products` is kept.
#[must_use]
pub fn project_products(products: Vec<Product>, categories: &[Category]) -> Vec<ProductView> {
    let names: HashMap<RecordId, &str> = categories
        .iter()
        .map(|category| (category.id, category.name.as_str()))
        .collect();

    products
        .into_iter()
        .map(|product| ProductView {
            category_name: names.get(&product.category_id).map(|name| (*name).to_owned()),
            product,
        })
        .collect()
}

/// Joins articles with their tags. Unknown tag ids are dropped from the view.
#[must_use]
pub fn project_articles(articles: Vec<NewsArticle>, tags: &[Tag]) -> Vec<ArticleView> {
    let names: HashMap<RecordId, &str> = tags
        .iter()
        .map(|tag| (tag.id, tag.name.as_str()))
        .collect();

    articles
        .into_iter()
        .map(|article| ArticleView {
            tag_names: article
                .tag_ids
                .iter()
                .filter_map(|tag_id| names.get(tag_id).map(|name| (*name).to_owned()))
                .collect(),
            article,
        })
        .collect()
}
