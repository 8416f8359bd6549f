use async_trait::async_trait;
use inoxviet_application::RequestContext;
use serde_json::Map;

use super::*;

/// A record collection served by the generic back-office CRUD routes.
#[async_trait]
pub trait Collection: Record {
    /// Returns the service owning this collection.
    fn service(state: &AppState) -> &RecordService<Self>;

    async fn create(state: &AppState, context: &RequestContext, record: Self) -> AppResult<Self> {
        Self::service(state).create(context, record).await
    }

    async fn update(state: &AppState, context: &RequestContext, record: Self) -> AppResult<Self> {
        Self::service(state).update(context, record).await
    }

    async fn delete(state: &AppState, context: &RequestContext, id: RecordId) -> AppResult<Self> {
        Self::service(state).delete(context, id).await
    }
}

#[async_trait]
impl Collection for Product {
    fn service(state: &AppState) -> &RecordService<Self> {
        state.catalog_service.products()
    }

    async fn create(state: &AppState, context: &RequestContext, record: Self) -> AppResult<Self> {
        state.catalog_service.create_product(context, record).await
    }

    async fn update(state: &AppState, context: &RequestContext, record: Self) -> AppResult<Self> {
        state.catalog_service.update_product(context, record).await
    }
}

#[async_trait]
impl Collection for Category {
    fn service(state: &AppState) -> &RecordService<Self> {
        state.catalog_service.categories()
    }

    async fn delete(state: &AppState, context: &RequestContext, id: RecordId) -> AppResult<Self> {
        state.catalog_service.delete_category(context, id).await
    }
}

#[async_trait]
impl Collection for NewsArticle {
    fn service(state: &AppState) -> &RecordService<Self> {
        state.content_service.posts()
    }

    async fn create(state: &AppState, context: &RequestContext, record: Self) -> AppResult<Self> {
        state.content_service.create_post(context, record).await
    }

    async fn update(state: &AppState, context: &RequestContext, record: Self) -> AppResult<Self> {
        state.content_service.update_post(context, record).await
    }
}

#[async_trait]
impl Collection for Tag {
    fn service(state: &AppState) -> &RecordService<Self> {
        state.content_service.tags()
    }
}

#[async_trait]
impl Collection for Slider {
    fn service(state: &AppState) -> &RecordService<Self> {
        state.content_service.sliders()
    }
}

#[async_trait]
impl Collection for Agent {
    fn service(state: &AppState) -> &RecordService<Self> {
        state.directory_service.agents()
    }
}

#[async_trait]
impl Collection for AdminUser {
    fn service(state: &AppState) -> &RecordService<Self> {
        state.directory_service.users()
    }

    async fn create(state: &AppState, context: &RequestContext, record: Self) -> AppResult<Self> {
        state.directory_service.create_user(context, record).await
    }

    async fn update(state: &AppState, context: &RequestContext, record: Self) -> AppResult<Self> {
        state.directory_service.update_user(context, record).await
    }
}

/// Decodes a request body into a record, forcing its id.
fn decode_record<T: Record>(payload: Value, id: RecordId) -> AppResult<T> {
    let mut fields: Map<String, Value> = match payload {
        Value::Object(fields) => fields,
        _ => {
            return Err(AppError::Validation(
                "request body must be a JSON object".to_owned(),
            ));
        }
    };
    fields.insert("id".to_owned(), Value::String(id.to_string()));

    serde_json::from_value(Value::Object(fields)).map_err(|error| {
        AppError::Validation(format!("invalid {} payload: {error}", T::KIND.action_prefix()))
    })
}

pub async fn list_records_handler<T: Collection>(
    State(state): State<AppState>,
    Admin(_context): Admin,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> ApiResult<Json<PageResponse<T>>> {
    let needle = query.q.unwrap_or_default();
    let records = T::service(&state)
        .list()
        .await?
        .into_iter()
        .filter(|record| matches_search(needle.as_str(), record.label(), record.slug()))
        .collect();

    Ok(Json(paginate(
        records,
        query.page,
        query.page_size,
        state.default_page_size,
    )?))
}

pub async fn get_record_handler<T: Collection>(
    State(state): State<AppState>,
    Admin(_context): Admin,
    ApiPath(id): ApiPath<RecordId>,
) -> ApiResult<Json<T>> {
    Ok(Json(T::service(&state).get(id).await?))
}

pub async fn create_record_handler<T: Collection>(
    State(state): State<AppState>,
    Admin(context): Admin,
    ApiJson(payload): ApiJson<Value>,
) -> ApiResult<(StatusCode, Json<T>)> {
    let record = decode_record::<T>(payload, RecordId::new())?;
    let created = T::create(&state, &context, record).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_record_handler<T: Collection>(
    State(state): State<AppState>,
    Admin(context): Admin,
    ApiPath(id): ApiPath<RecordId>,
    ApiJson(payload): ApiJson<Value>,
) -> ApiResult<Json<T>> {
    let record = decode_record::<T>(payload, id)?;
    Ok(Json(T::update(&state, &context, record).await?))
}

pub async fn delete_record_handler<T: Collection>(
    State(state): State<AppState>,
    Admin(context): Admin,
    ApiPath(id): ApiPath<RecordId>,
) -> ApiResult<StatusCode> {
    T::delete(&state, &context, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
