use std::str::FromStr;

use super::*;

pub async fn public_products_handler(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CatalogQuery>,
) -> ApiResult<Json<PageResponse<ProductView>>> {
    let products = state
        .catalog_service
        .public_products(query.category.as_deref())
        .await?;

    Ok(Json(paginate(
        products,
        query.page,
        query.page_size,
        state.default_page_size,
    )?))
}

pub async fn public_product_handler(
    State(state): State<AppState>,
    ApiPath(slug): ApiPath<String>,
) -> ApiResult<Json<ProductView>> {
    Ok(Json(state.catalog_service.public_product(slug.as_str()).await?))
}

pub async fn public_categories_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Category>>> {
    let categories = state
        .catalog_service
        .categories()
        .list()
        .await?
        .into_iter()
        .filter(|category| category.status == PublishStatus::Published)
        .collect();

    Ok(Json(categories))
}

pub async fn set_product_status_handler(
    State(state): State<AppState>,
    Admin(context): Admin,
    ApiPath(id): ApiPath<RecordId>,
    ApiJson(payload): ApiJson<StatusRequest>,
) -> ApiResult<Json<Product>> {
    let status = PublishStatus::from_str(payload.status.as_str())?;
    Ok(Json(
        state
            .catalog_service
            .set_product_status(&context, id, status)
            .await?,
    ))
}

pub async fn toggle_product_featured_handler(
    State(state): State<AppState>,
    Admin(context): Admin,
    ApiPath(id): ApiPath<RecordId>,
) -> ApiResult<Json<Product>> {
    Ok(Json(state.catalog_service.toggle_featured(&context, id).await?))
}

pub async fn set_category_status_handler(
    State(state): State<AppState>,
    Admin(context): Admin,
    ApiPath(id): ApiPath<RecordId>,
    ApiJson(payload): ApiJson<StatusRequest>,
) -> ApiResult<Json<Category>> {
    let status = PublishStatus::from_str(payload.status.as_str())?;
    Ok(Json(
        state
            .catalog_service
            .set_category_status(&context, id, status)
            .await?,
    ))
}
