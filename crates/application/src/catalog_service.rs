use std::sync::Arc;

use inoxviet_core::{AppError, AppResult, RecordId};
use inoxviet_domain::{
    Category, Product, ProductView, PublishStatus, project_products,
};

use crate::{AuditService, RecordRepository, RecordService, RequestContext};

#[cfg(test)]
mod tests;

/// Application service for categories and products.
#[derive(Clone)]
pub struct CatalogService {
    categories: RecordService<Category>,
    products: RecordService<Product>,
}

impl CatalogService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(
        category_repository: Arc<dyn RecordRepository<Category>>,
        product_repository: Arc<dyn RecordRepository<Product>>,
        audit_service: AuditService,
    ) -> Self {
        Self {
            categories: RecordService::new(category_repository, audit_service.clone()),
            products: RecordService::new(product_repository, audit_service),
        }
    }

    /// Category collection.
    #[must_use]
    pub fn categories(&self) -> &RecordService<Category> {
        &self.categories
    }

    /// Product collection.
    #[must_use]
    pub fn products(&self) -> &RecordService<Product> {
        &self.products
    }

    /// Creates a product in an existing category.
    pub async fn create_product(
        &self,
        context: &RequestContext,
        product: Product,
    ) -> AppResult<Product> {
        self.ensure_category_exists(product.category_id).await?;
        self.products.create(context, product).await
    }

    /// Replaces a product, re-checking its category.
    pub async fn update_product(
        &self,
        context: &RequestContext,
        product: Product,
    ) -> AppResult<Product> {
        self.ensure_category_exists(product.category_id).await?;
        self.products.update(context, product).await
    }

    /// Deletes a category that no product refers to.
    pub async fn delete_category(
        &self,
        context: &RequestContext,
        category_id: RecordId,
    ) -> AppResult<Category> {
        let in_use = self
            .products
            .list()
            .await?
            .iter()
            .filter(|product| product.category_id == category_id)
            .count();
        if in_use > 0 {
            return Err(AppError::Conflict(format!(
                "category '{category_id}' still has {in_use} product(s)"
            )));
        }

        self.categories.delete(context, category_id).await
    }

    /// Changes product visibility.
    pub async fn set_product_status(
        &self,
        context: &RequestContext,
        product_id: RecordId,
        status: PublishStatus,
    ) -> AppResult<Product> {
        self.products
            .change_state(context, product_id, |product| {
                product.status = status;
                status.label().to_owned()
            })
            .await
    }

    /// Changes category visibility.
    pub async fn set_category_status(
        &self,
        context: &RequestContext,
        category_id: RecordId,
        status: PublishStatus,
    ) -> AppResult<Category> {
        self.categories
            .change_state(context, category_id, |category| {
                category.status = status;
                status.label().to_owned()
            })
            .await
    }

    /// Flips the home page highlight flag.
    pub async fn toggle_featured(
        &self,
        context: &RequestContext,
        product_id: RecordId,
    ) -> AppResult<Product> {
        self.products
            .change_state(context, product_id, |product| {
                product.featured = !product.featured;
                if product.featured {
                    "nổi bật".to_owned()
                } else {
                    "bỏ nổi bật".to_owned()
                }
            })
            .await
    }

    /// Returns all products joined with category names, for the back office.
    pub async fn product_views(&self) -> AppResult<Vec<ProductView>> {
        let categories = self.categories.list().await?;
        let products = self.products.list().await?;
        Ok(project_products(products, &categories))
    }

    /// Returns what the public catalog shows: published products in
    /// published categories, optionally limited to one category slug.
    pub async fn public_products(&self, category_slug: Option<&str>) -> AppResult<Vec<ProductView>> {
        let categories: Vec<Category> = self
            .categories
            .list()
            .await?
            .into_iter()
            .filter(|category| category.status == PublishStatus::Published)
            .filter(|category| category_slug.is_none_or(|slug| category.slug == slug))
            .collect();

        let products = self
            .products
            .list()
            .await?
            .into_iter()
            .filter(Product::is_visible)
            .filter(|product| {
                categories
                    .iter()
                    .any(|category| category.id == product.category_id)
            })
            .collect();

        Ok(project_products(products, &categories))
    }

    /// Returns one public product by slug.
    pub async fn public_product(&self, slug: &str) -> AppResult<ProductView> {
        self.public_products(None)
            .await?
            .into_iter()
            .find(|view| view.product.slug == slug)
            .ok_or_else(|| AppError::NotFound(format!("product '{slug}' does not exist")))
    }

    async fn ensure_category_exists(&self, category_id: RecordId) -> AppResult<()> {
        match self.categories.get(category_id).await {
            Ok(_) => Ok(()),
            Err(AppError::NotFound(_)) => Err(AppError::Validation(format!(
                "category '{category_id}' does not exist"
            ))),
            Err(error) => Err(error),
        }
    }
}
