use std::str::FromStr;

use super::*;

pub async fn public_news_handler(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<NewsQuery>,
) -> ApiResult<Json<PageResponse<ArticleView>>> {
    let articles = state
        .content_service
        .public_news(query.tag.as_deref())
        .await?;

    Ok(Json(paginate(
        articles,
        query.page,
        query.page_size,
        state.default_page_size,
    )?))
}

pub async fn public_article_handler(
    State(state): State<AppState>,
    ApiPath(slug): ApiPath<String>,
) -> ApiResult<Json<ArticleView>> {
    Ok(Json(state.content_service.public_article(slug.as_str()).await?))
}

pub async fn active_sliders_handler(State(state): State<AppState>) -> ApiResult<Json<Vec<Slider>>> {
    Ok(Json(state.content_service.active_sliders().await?))
}

pub async fn set_post_status_handler(
    State(state): State<AppState>,
    Admin(context): Admin,
    ApiPath(id): ApiPath<RecordId>,
    ApiJson(payload): ApiJson<StatusRequest>,
) -> ApiResult<Json<NewsArticle>> {
    let status = PublishStatus::from_str(payload.status.as_str())?;
    Ok(Json(
        state
            .content_service
            .set_post_status(&context, id, status)
            .await?,
    ))
}

pub async fn set_slider_active_handler(
    State(state): State<AppState>,
    Admin(context): Admin,
    ApiPath(id): ApiPath<RecordId>,
    ApiJson(payload): ApiJson<ActiveRequest>,
) -> ApiResult<Json<Slider>> {
    Ok(Json(
        state
            .content_service
            .set_slider_active(&context, id, payload.active)
            .await?,
    ))
}
