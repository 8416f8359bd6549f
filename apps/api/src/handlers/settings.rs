use inoxviet_domain::{ChatPromptConfig, SiteSettings};

use super::*;

pub async fn public_site_settings_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<SiteSettings>> {
    Ok(Json(state.settings_service.site_settings().await?))
}

pub async fn site_settings_handler(
    State(state): State<AppState>,
    Admin(_context): Admin,
) -> ApiResult<Json<SiteSettings>> {
    Ok(Json(state.settings_service.site_settings().await?))
}

pub async fn update_site_settings_handler(
    State(state): State<AppState>,
    Admin(context): Admin,
    ApiJson(payload): ApiJson<SiteSettings>,
) -> ApiResult<Json<SiteSettings>> {
    Ok(Json(
        state
            .settings_service
            .save_site_settings(&context, payload)
            .await?,
    ))
}

pub async fn chat_prompt_handler(
    State(state): State<AppState>,
    Admin(_context): Admin,
) -> ApiResult<Json<ChatPromptConfig>> {
    Ok(Json(state.settings_service.chat_prompt_config().await?))
}

pub async fn update_chat_prompt_handler(
    State(state): State<AppState>,
    Admin(context): Admin,
    ApiJson(payload): ApiJson<ChatPromptConfig>,
) -> ApiResult<Json<ChatPromptConfig>> {
    Ok(Json(
        state
            .settings_service
            .save_chat_prompt_config(&context, payload)
            .await?,
    ))
}
