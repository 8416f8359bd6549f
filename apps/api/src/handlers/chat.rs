use inoxviet_application::ChatTurn;

use super::*;

pub async fn chat_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ChatRequest>,
) -> ApiResult<Json<ChatReplyResponse>> {
    let history = payload
        .history
        .into_iter()
        .map(ChatTurn::try_from)
        .collect::<AppResult<Vec<_>>>()?;

    let reply = state
        .chat_service
        .reply(payload.message.as_str(), history)
        .await?;

    Ok(Json(ChatReplyResponse { reply }))
}
