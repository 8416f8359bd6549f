use inoxviet_application::AuthEvent;

use super::*;

pub async fn record_auth_event_handler(
    State(state): State<AppState>,
    Caller(context): Caller,
    ApiJson(payload): ApiJson<AuthEventRequest>,
) -> ApiResult<StatusCode> {
    let event = AuthEvent::try_from(payload)?;
    state
        .auth_event_service
        .record_event(&context, event)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
